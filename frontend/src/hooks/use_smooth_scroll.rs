use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::config;
use crate::error::DomError;
use crate::utils::scroll::{anchor_id, scroll_to_section};

fn clicked_anchor(event: &MouseEvent) -> Option<String> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest("a").ok()??;
    let href = link.get_attribute("href")?;
    anchor_id(&href).map(str::to_string)
}

/// Turns clicks on `#section` links anywhere in the document into smooth
/// scrolls that leave room for the fixed navbar.
#[hook]
pub fn use_smooth_scroll() {
    use_effect_with_deps(
        move |_| {
            let listener = Closure::<dyn Fn(MouseEvent)>::new(move |event: MouseEvent| {
                let Some(id) = clicked_anchor(&event) else {
                    return;
                };
                event.prevent_default();
                match scroll_to_section(&id, config::get_scroll_header_offset()) {
                    Ok(true) => {}
                    Ok(false) => log::debug!("No section with id {}", id),
                    Err(err) => log::warn!("Smooth scroll to #{} failed: {}", id, err),
                }
            });

            let document = web_sys::window().and_then(|window| window.document());
            let registered = match &document {
                Some(document) => document
                    .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
                    .map_err(DomError::listener),
                None => Err(DomError::NoDocument),
            };
            if let Err(err) = &registered {
                log::warn!("{}", err);
            }

            move || {
                if let (Some(document), Ok(())) = (document, registered) {
                    let _ = document
                        .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                }
                drop(listener);
            }
        },
        (),
    );
}
