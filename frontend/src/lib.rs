use yew::prelude::*;
use yew_router::prelude::*;

pub mod background;
pub mod chat;
pub mod components;
pub mod config;
pub mod contact;
pub mod content;
pub mod counter;
pub mod error;
pub mod hooks;
pub mod pages;
pub mod sections;
pub mod theme;
pub mod utils;

use pages::landing::Landing;
use pages::not_found::NotFound;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
