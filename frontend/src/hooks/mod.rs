pub mod use_counter;
pub mod use_in_view;
pub mod use_scrolled;
pub mod use_smooth_scroll;

pub use use_counter::{use_counter, UseCounterHandle};
pub use use_in_view::{use_in_view, Visibility};
pub use use_scrolled::use_scrolled;
pub use use_smooth_scroll::use_smooth_scroll;
