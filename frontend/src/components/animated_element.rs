use yew::prelude::*;

use crate::hooks::{use_in_view, Visibility};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnimationVariant {
    #[default]
    FadeIn,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Scale,
    Bounce,
    Rotate,
}

impl AnimationVariant {
    /// Transform applied before the element is revealed. `amount` scales the
    /// slide distance.
    pub fn hidden_transform(self, amount: f64) -> String {
        let distance = amount * 100.0;
        match self {
            AnimationVariant::FadeIn => "none".to_string(),
            AnimationVariant::SlideUp => format!("translateY({:.0}px)", distance),
            AnimationVariant::SlideDown => format!("translateY({:.0}px)", -distance),
            AnimationVariant::SlideLeft => format!("translateX({:.0}px)", -distance),
            AnimationVariant::SlideRight => format!("translateX({:.0}px)", distance),
            AnimationVariant::Scale => "scale(0.8)".to_string(),
            AnimationVariant::Bounce => format!("translateY({:.0}px)", amount * 50.0),
            AnimationVariant::Rotate => "rotate(-90deg)".to_string(),
        }
    }
}

pub fn element_style(variant: AnimationVariant, amount: f64, delay_s: f64, duration_s: f64, revealed: bool) -> String {
    let (opacity, transform) = if revealed {
        (1, "none".to_string())
    } else {
        (0, variant.hidden_transform(amount))
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {d}s ease-out {delay}s, transform {d}s ease-out {delay}s;",
        opacity,
        transform,
        d = duration_s,
        delay = delay_s,
    )
}

#[derive(Properties, PartialEq)]
pub struct AnimatedElementProps {
    #[prop_or_default]
    pub variant: AnimationVariant,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or(0.5)]
    pub duration: f64,
    #[prop_or(0.3)]
    pub amount: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Reveals its children once, the first time they scroll into view.
#[function_component]
pub fn AnimatedElement(props: &AnimatedElementProps) -> Html {
    let node = use_node_ref();
    let visibility = use_in_view(node.clone());
    let style = element_style(
        props.variant,
        props.amount,
        props.delay,
        props.duration,
        visibility != Visibility::Hidden,
    );

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
