//! Animated statistic counters: decoding decorated targets such as `"$12M+"`,
//! easing toward them frame by frame, and rendering every intermediate value
//! with the target's decoration intact.

pub mod animation;
pub mod display_value;
pub mod easing;

pub use animation::{AnimationState, Step};
pub use display_value::{DisplayValue, DisplayValueSpec, RawTarget};
