use yew::prelude::*;

use crate::background::{elements_for, Density};

const BACKGROUND_CSS: &str = r#"
    .animated-background {
        position: relative;
        overflow: hidden;
    }
    .floating-element {
        position: absolute;
        border-radius: 50%;
        filter: blur(24px);
        background-color: currentColor;
        z-index: -1;
        pointer-events: none;
        animation-name: float-drift;
        animation-timing-function: ease-in-out;
        animation-iteration-count: infinite;
        animation-direction: alternate;
    }
    @keyframes float-drift {
        from { transform: translate(0, 0); }
        to { transform: translate(var(--drift-x), var(--drift-y)); }
    }
    @media (prefers-reduced-motion: reduce) {
        .floating-element { animation: none; }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct AnimatedBackgroundProps {
    #[prop_or_default]
    pub density: Density,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn AnimatedBackground(props: &AnimatedBackgroundProps) -> Html {
    html! {
        <div class={classes!("animated-background", props.class.clone())}>
            <style>{BACKGROUND_CSS}</style>
            { for elements_for(props.density).iter().map(|element| html! {
                <div class="floating-element" style={element.style()}></div>
            }) }
            { for props.children.iter() }
        </div>
    }
}
