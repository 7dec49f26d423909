use yew::prelude::*;

use crate::theme::ThemeMode;

#[function_component]
pub fn ThemeToggle() -> Html {
    let theme = use_state(ThemeMode::system);

    // Keep <html> in sync with the selected mode
    {
        use_effect_with_deps(
            move |theme: &ThemeMode| {
                if let Err(err) = theme.apply() {
                    log::warn!("Failed to apply {} theme: {}", theme.name(), err);
                }
                || ()
            },
            *theme,
        );
    }

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| theme.set(theme.toggled()))
    };

    html! {
        <button
            class="theme-toggle"
            onclick={toggle}
            title={format!("Switch to {} mode", theme.toggled().name())}
        >
            <i class={theme.icon_class()}></i>
            <span class="sr-only">{"Toggle theme"}</span>
        </button>
    }
}
