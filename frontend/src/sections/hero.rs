use yew::prelude::*;

use crate::components::{AnimatedBackground, AnimatedElement, AnimationVariant, Counter};
use crate::content::HERO_STATS;
use crate::counter::RawTarget;

const HERO_CSS: &str = r#"
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding: 8rem 1rem 4rem;
    }
    .hero-inner {
        max-width: 1200px;
        margin: 0 auto;
        text-align: center;
    }
    .hero h1 {
        font-size: clamp(2.5rem, 6vw, 4.5rem);
        font-weight: 800;
        line-height: 1.1;
        margin-bottom: 1.5rem;
    }
    .hero h1 .highlight { color: var(--primary); }
    .hero p.lead {
        max-width: 40rem;
        margin: 0 auto 2.5rem;
        font-size: 1.25rem;
        opacity: 0.8;
    }
    .hero-actions {
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem;
    }
    .hero-stats {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
        gap: 2rem;
        margin-top: 4rem;
    }
    .hero-stat .counter {
        position: relative;
        display: inline-block;
        font-size: 2.25rem;
        font-weight: 700;
        color: var(--primary);
    }
    .counter-glow {
        position: absolute;
        inset: -0.5rem;
        border-radius: 9999px;
        background: var(--primary);
        opacity: 0.12;
        filter: blur(12px);
        z-index: -1;
    }
    .hero-stat .label { opacity: 0.7; margin-top: 0.25rem; }
"#;

#[function_component]
pub fn Hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <style>{HERO_CSS}</style>
            <AnimatedBackground class="hero-inner">
                <AnimatedElement variant={AnimationVariant::SlideUp}>
                    <h1>
                        {"Turn Unused Software Licenses Into "}
                        <span class="highlight">{"Cash"}</span>
                    </h1>
                </AnimatedElement>
                <AnimatedElement variant={AnimationVariant::SlideUp} delay={0.2}>
                    <p class="lead">
                        {"SoftSell helps businesses recover value from unused software licenses. Get a fair valuation and fast payment."}
                    </p>
                </AnimatedElement>
                <AnimatedElement variant={AnimationVariant::FadeIn} delay={0.4}>
                    <div class="hero-actions">
                        <a href="#contact" class="cta-button">{"Sell My Licenses"}</a>
                        <a href="#how-it-works" class="secondary-button">{"How It Works"}</a>
                    </div>
                </AnimatedElement>
                <div class="hero-stats">
                    { for HERO_STATS.iter().enumerate().map(|(i, stat)| html! {
                        <AnimatedElement variant={AnimationVariant::Scale} delay={0.5 + i as f64 * 0.1}>
                            <div class="hero-stat">
                                <Counter end={RawTarget::from(stat.number)} />
                                <div class="label">{stat.label}</div>
                            </div>
                        </AnimatedElement>
                    }) }
                </div>
            </AnimatedBackground>
        </section>
    }
}
