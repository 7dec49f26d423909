use yew::prelude::*;

use super::use_in_view::{use_in_view, Visibility};
use crate::counter::{AnimationState, DisplayValueSpec, Step};
use crate::utils::frame_loop::FrameLoop;
use crate::utils::now_ms;

pub struct UseCounterHandle {
    pub display: String,
    pub visible: bool,
}

/// Counts up to `spec`'s target the first time `node` scrolls into view.
#[hook]
pub fn use_counter(spec: DisplayValueSpec, node: NodeRef) -> UseCounterHandle {
    let state = use_mut_ref(|| AnimationState::new(&spec));
    let display = use_state(|| state.borrow().current_display().to_string());
    let frame_loop = use_mut_ref(|| None::<FrameLoop>);
    let visibility = use_in_view(node);

    // Stop stepping as soon as the counter unmounts.
    {
        let frame_loop = frame_loop.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    frame_loop.borrow_mut().take();
                }
            },
            (),
        );
    }

    {
        let state = state.clone();
        let display = display.clone();
        let frame_loop = frame_loop.clone();
        use_effect_with_deps(
            move |visibility: &Visibility| {
                match visibility {
                    Visibility::Hidden => {}
                    Visibility::Unobservable => {
                        let mut state = state.borrow_mut();
                        state.finish(now_ms());
                        display.set(state.current_display().to_string());
                    }
                    Visibility::Visible => {
                        let started = state.borrow_mut().trigger(now_ms());
                        if started {
                            log::debug!("Counter started toward {}", state.borrow().numeric_target());
                            let ticker = {
                                let state = state.clone();
                                let display = display.clone();
                                move |timestamp: f64| {
                                    let (step, text) = {
                                        let mut state = state.borrow_mut();
                                        let step = state.step(timestamp);
                                        (step, state.current_display().to_string())
                                    };
                                    display.set(text);
                                    if step == Step::Done {
                                        log::debug!("Counter finished at {}", state.borrow().current_display());
                                    }
                                    step == Step::Continue
                                }
                            };
                            match FrameLoop::start(ticker) {
                                Ok(running) => *frame_loop.borrow_mut() = Some(running),
                                Err(err) => {
                                    log::warn!("Counter animation unavailable: {}", err);
                                    let mut state = state.borrow_mut();
                                    state.finish(now_ms());
                                    display.set(state.current_display().to_string());
                                }
                            }
                        }
                    }
                }
                || ()
            },
            visibility,
        );
    }

    UseCounterHandle {
        display: (*display).clone(),
        visible: visibility != Visibility::Hidden,
    }
}
