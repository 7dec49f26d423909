use yew::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config;
use crate::content::{section_label, NAV_SECTIONS};
use crate::hooks::use_scrolled;

const NAVBAR_CSS: &str = r#"
    .navbar {
        position: fixed;
        top: 0;
        width: 100%;
        z-index: 40;
        transition: background-color 0.3s, box-shadow 0.3s, backdrop-filter 0.3s;
    }
    .navbar.scrolled {
        background: var(--background-translucent);
        backdrop-filter: blur(12px);
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
    }
    .navbar-inner {
        max-width: 1200px;
        margin: 0 auto;
        height: 4rem;
        padding: 0 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.25rem;
        font-weight: 700;
        color: inherit;
        text-decoration: none;
    }
    .nav-logo i { color: var(--primary); }
    .nav-links { display: flex; gap: 2rem; }
    .nav-links a, .mobile-menu a {
        color: inherit;
        opacity: 0.8;
        font-weight: 500;
        text-decoration: none;
        transition: opacity 0.2s, transform 0.2s;
    }
    .nav-links a:hover { opacity: 1; transform: translateY(-2px); }
    .nav-actions { display: flex; align-items: center; gap: 0.5rem; }
    .menu-button { display: none; }
    .mobile-menu {
        position: fixed;
        inset: 0;
        z-index: 40;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 2rem;
        font-size: 1.125rem;
        background: var(--background-translucent);
    }
    @media (max-width: 768px) {
        .nav-links, .nav-actions .cta-button { display: none; }
        .menu-button { display: inline-flex; position: relative; z-index: 50; }
    }
"#;

#[function_component]
pub fn Navbar() -> Html {
    let scrolled = use_scrolled(config::get_scrolled_threshold());
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |onclick: Option<Callback<MouseEvent>>| -> Html {
        NAV_SECTIONS
            .iter()
            .map(|id| {
                html! {
                    <a href={format!("#{}", id)} onclick={onclick.clone()}>{section_label(id)}</a>
                }
            })
            .collect()
    };

    html! {
        <header class={classes!("navbar", scrolled.then_some("scrolled"))}>
            <style>{NAVBAR_CSS}</style>
            <div class="navbar-inner">
                <a href="#" class="nav-logo">
                    <i class="fas fa-hand-holding-dollar"></i>
                    <span>{"SoftSell"}</span>
                </a>
                <nav class="nav-links">
                    { links(None) }
                </nav>
                <div class="nav-actions">
                    <ThemeToggle />
                    <a href="#contact" class="cta-button">{"Get Started"}</a>
                    <button class="menu-button" aria-label="Menu" onclick={toggle_menu}>
                        <i class={if *menu_open { "fas fa-xmark" } else { "fas fa-bars" }}></i>
                    </button>
                </div>
            </div>
            if *menu_open {
                <nav class="mobile-menu">
                    { links(Some(close_menu.clone())) }
                    <a href="#contact" class="cta-button" onclick={close_menu}>{"Get Started"}</a>
                </nav>
            }
        </header>
    }
}
