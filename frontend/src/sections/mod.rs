pub mod contact;
pub mod footer;
pub mod hero;
pub mod how_it_works;
pub mod testimonials;
pub mod why_choose_us;

pub use contact::ContactSection;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use testimonials::Testimonials;
pub use why_choose_us::WhyChooseUs;
