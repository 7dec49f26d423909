use yew::prelude::*;

use crate::config;
use crate::counter::{DisplayValueSpec, RawTarget};
use crate::hooks::use_counter;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub end: RawTarget,
    #[prop_or_default]
    pub duration_ms: Option<u32>,
    #[prop_or_default]
    pub decimal_places: usize,
    #[prop_or_default]
    pub prefix: String,
    #[prop_or_default]
    pub suffix: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component]
pub fn Counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let spec = DisplayValueSpec::new(props.end.clone())
        .duration_ms(props.duration_ms.unwrap_or_else(config::get_counter_duration_ms))
        .decimal_places(props.decimal_places)
        .prefix(props.prefix.clone())
        .suffix(props.suffix.clone());
    let counter = use_counter(spec, node.clone());

    html! {
        <span
            ref={node}
            class={classes!("counter", counter.visible.then_some("counter-visible"), props.class.clone())}
        >
            if counter.visible {
                <span class="counter-glow"></span>
            }
            {counter.display}
        </span>
    }
}
