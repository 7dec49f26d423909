pub mod animated_background;
pub mod animated_element;
pub mod chatbot;
pub mod counter;
pub mod navbar;
pub mod theme_toggle;

pub use animated_background::AnimatedBackground;
pub use animated_element::{AnimatedElement, AnimationVariant};
pub use chatbot::Chatbot;
pub use counter::Counter;
pub use navbar::Navbar;
pub use theme_toggle::ThemeToggle;
