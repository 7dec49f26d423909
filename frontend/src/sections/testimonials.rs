use yew::prelude::*;

use crate::components::{AnimatedElement, AnimationVariant};
use crate::content::{Testimonial, TESTIMONIALS};

const TESTIMONIALS_CSS: &str = r#"
    .testimonials {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
        gap: 2rem;
        margin-top: 3rem;
    }
    .testimonial-card {
        height: 100%;
        display: flex;
        flex-direction: column;
        justify-content: space-between;
        padding: 2rem;
        border-radius: 0.75rem;
        border: 1px solid var(--border);
        background: var(--card);
    }
    .testimonial-card blockquote {
        margin: 0 0 1.5rem;
        font-style: italic;
        opacity: 0.85;
    }
    .testimonial-author { display: flex; align-items: center; gap: 1rem; }
    .avatar {
        position: relative;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        overflow: hidden;
        display: flex;
        align-items: center;
        justify-content: center;
        font-weight: 600;
        background: var(--muted);
    }
    .avatar img { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
    .testimonial-author .role { font-size: 0.875rem; opacity: 0.7; }
"#;

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="testimonial-card">
            <blockquote>{format!("\u{201c}{}\u{201d}", testimonial.quote)}</blockquote>
            <div class="testimonial-author">
                <div class="avatar">
                    {testimonial.initials()}
                    <img src={testimonial.avatar} alt={testimonial.author} />
                </div>
                <div>
                    <div class="name">{testimonial.author}</div>
                    <div class="role">{format!("{}, {}", testimonial.role, testimonial.company)}</div>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn Testimonials() -> Html {
    html! {
        <section id="testimonials" class="section muted">
            <style>{TESTIMONIALS_CSS}</style>
            <div class="section-inner">
                <AnimatedElement variant={AnimationVariant::SlideUp}>
                    <div class="section-heading">
                        <h2>{"What Our Customers Say"}</h2>
                        <p>{"Don't just take our word for it. Here's what our customers have to say about SoftSell."}</p>
                    </div>
                </AnimatedElement>
                <div class="testimonials">
                    { for TESTIMONIALS.iter().enumerate().map(|(i, testimonial)| html! {
                        <AnimatedElement variant={AnimationVariant::SlideUp} delay={i as f64 * 0.2}>
                            { testimonial_card(testimonial) }
                        </AnimatedElement>
                    }) }
                </div>
            </div>
        </section>
    }
}
