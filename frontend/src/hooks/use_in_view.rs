use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::error::DomError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
    /// The browser could not observe the element; callers should render
    /// their final state right away.
    Unobservable,
}

/// IntersectionObserver that reports the first time its element enters the
/// viewport and then disconnects itself. Dropping it disconnects too.
pub struct OnceObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl OnceObserver {
    pub fn observe<F>(element: &Element, root_margin: &str, on_visible: F) -> Result<Self, DomError>
    where
        F: FnOnce() + 'static,
    {
        let mut on_visible = Some(on_visible);
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let entered = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                if entered {
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(DomError::observer)?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OnceObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Flips to `Visible` once, when the referenced element first scrolls into
/// view, and stays there.
#[hook]
pub fn use_in_view(node: NodeRef) -> Visibility {
    let visibility = use_state_eq(|| Visibility::Hidden);
    {
        let visibility = visibility.clone();
        use_effect_with_deps(
            move |_| {
                let observer = match node.cast::<Element>() {
                    Some(element) => {
                        let on_visible = {
                            let visibility = visibility.clone();
                            move || visibility.set(Visibility::Visible)
                        };
                        match OnceObserver::observe(&element, config::get_viewport_margin(), on_visible) {
                            Ok(observer) => Some(observer),
                            Err(err) => {
                                log::warn!("{}", err);
                                visibility.set(Visibility::Unobservable);
                                None
                            }
                        }
                    }
                    None => {
                        log::warn!("{}", DomError::NotMounted);
                        visibility.set(Visibility::Unobservable);
                        None
                    }
                };
                move || drop(observer)
            },
            (),
        );
    }
    *visibility
}
