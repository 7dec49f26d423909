use yew::prelude::*;

use crate::components::{Chatbot, Navbar};
use crate::hooks::use_smooth_scroll;
use crate::sections::{ContactSection, Footer, Hero, HowItWorks, Testimonials, WhyChooseUs};

const LANDING_CSS: &str = r#"
    .landing { min-height: 100vh; }
    .section { padding: 6rem 1rem; }
    .section.muted { background: var(--muted); }
    .section-inner { max-width: 1200px; margin: 0 auto; }
    .section-heading { max-width: 40rem; margin: 0 auto; text-align: center; }
    .section-heading h2 { font-size: clamp(2rem, 4vw, 2.75rem); font-weight: 700; margin-bottom: 1rem; }
    .section-heading p { opacity: 0.75; font-size: 1.125rem; }
    .icon-badge {
        width: 3rem;
        height: 3rem;
        border-radius: 0.75rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.25rem;
        margin-bottom: 1rem;
    }
"#;

#[function_component(Landing)]
pub fn landing() -> Html {
    use_smooth_scroll();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    if window.location().hash().map(|hash| hash.is_empty()).unwrap_or(true) {
                        window.scroll_to_with_x_and_y(0.0, 0.0);
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing">
            <style>{LANDING_CSS}</style>
            <Navbar />
            <main>
                <Hero />
                <HowItWorks />
                <WhyChooseUs />
                <Testimonials />
                <ContactSection />
            </main>
            <Footer />
            <Chatbot />
        </div>
    }
}
