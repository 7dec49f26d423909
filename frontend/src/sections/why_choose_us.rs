use yew::prelude::*;

use crate::background::Density;
use crate::components::{AnimatedBackground, AnimatedElement, AnimationVariant};
use crate::content::FEATURES;

const FEATURES_CSS: &str = r#"
    .features {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
        gap: 1.5rem;
        margin-top: 3rem;
    }
    .feature-card {
        height: 100%;
        padding: 1.5rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: var(--card);
        transition: transform 0.3s, border-color 0.3s;
    }
    .feature-card:hover {
        transform: translateY(-4px);
        border-color: var(--primary);
    }
"#;

#[function_component]
pub fn WhyChooseUs() -> Html {
    html! {
        <section id="why-choose-us" class="section">
            <style>{FEATURES_CSS}</style>
            <AnimatedBackground density={Density::High} class="section-inner">
                <AnimatedElement variant={AnimationVariant::SlideUp}>
                    <div class="section-heading">
                        <h2>{"Why Choose Us"}</h2>
                        <p>{"We make selling software licenses simple, secure, and profitable."}</p>
                    </div>
                </AnimatedElement>
                <div class="features">
                    { for FEATURES.iter().enumerate().map(|(i, feature)| html! {
                        <AnimatedElement variant={AnimationVariant::Scale} delay={i as f64 * 0.1}>
                            <div class="feature-card">
                                <div class={classes!("icon-badge", feature.color)}>
                                    <i class={feature.icon}></i>
                                </div>
                                <h3>{feature.title}</h3>
                                <p>{feature.description}</p>
                            </div>
                        </AnimatedElement>
                    }) }
                </div>
            </AnimatedBackground>
        </section>
    }
}
