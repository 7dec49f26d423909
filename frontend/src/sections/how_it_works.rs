use yew::prelude::*;

use crate::background::Density;
use crate::components::{AnimatedBackground, AnimatedElement, AnimationVariant};
use crate::content::STEPS;

const STEPS_CSS: &str = r#"
    .steps {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
        gap: 2rem;
        margin-top: 3rem;
    }
    .step-card {
        position: relative;
        height: 100%;
        padding: 2rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: var(--card);
        transition: transform 0.3s, box-shadow 0.3s;
    }
    .step-card:hover {
        transform: translateY(-4px);
        box-shadow: 0 12px 24px rgba(0, 0, 0, 0.1);
    }
    .step-number {
        position: absolute;
        top: -1rem;
        left: -1rem;
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 700;
        background: var(--primary);
        color: var(--primary-foreground);
    }
"#;

#[function_component]
pub fn HowItWorks() -> Html {
    html! {
        <section id="how-it-works" class="section muted">
            <style>{STEPS_CSS}</style>
            <AnimatedBackground density={Density::High} class="section-inner">
                <AnimatedElement variant={AnimationVariant::SlideUp}>
                    <div class="section-heading">
                        <h2>{"How It Works"}</h2>
                        <p>{"Selling your unused software licenses has never been easier. Follow these simple steps to get started."}</p>
                    </div>
                </AnimatedElement>
                <div class="steps">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <AnimatedElement variant={AnimationVariant::SlideUp} delay={i as f64 * 0.2}>
                            <div class="step-card">
                                <span class="step-number">{(i + 1).to_string()}</span>
                                <div class={classes!("icon-badge", step.color)}>
                                    <i class={step.icon}></i>
                                </div>
                                <h3>{step.title}</h3>
                                <p>{step.description}</p>
                            </div>
                        </AnimatedElement>
                    }) }
                </div>
            </AnimatedBackground>
        </section>
    }
}
