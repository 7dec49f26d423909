use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::error::DomError;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Liveness flag shared between a [`FrameLoop`] and its frame callback.
/// Once closed it stays closed, so no tick runs after teardown.
#[derive(Clone, Debug)]
pub struct FrameGate {
    open: Rc<Cell<bool>>,
}

impl FrameGate {
    pub fn new() -> Self {
        Self {
            open: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn close(&self) {
        self.open.set(false);
    }

    /// Runs one tick if the gate is still open and decides whether to
    /// re-arm. The tick may close the gate itself (e.g. by tearing down its
    /// owner), which is checked again afterwards.
    pub fn run_tick<F>(&self, tick: &mut F, timestamp: f64) -> bool
    where
        F: FnMut(f64) -> bool,
    {
        if !self.is_open() {
            return false;
        }
        if !tick(timestamp) || !self.is_open() {
            self.close();
            return false;
        }
        true
    }
}

impl Default for FrameGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-arming `requestAnimationFrame` loop. The tick receives the frame
/// timestamp and returns whether another frame is wanted. Dropping the loop
/// cancels the pending frame and guarantees no further tick runs.
pub struct FrameLoop {
    gate: FrameGate,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl FrameLoop {
    pub fn start<F>(mut tick: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let gate = FrameGate::new();
        let pending = Rc::new(Cell::new(None));
        let callback: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let frame = {
            let window = window.clone();
            let gate = gate.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
                pending.set(None);
                if !gate.run_tick(&mut tick, timestamp) {
                    return;
                }
                if let Some(next) = callback.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => {
                            log::warn!("{}", DomError::frame(err));
                            gate.close();
                        }
                    }
                }
            })
        };

        let id = window
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .map_err(DomError::frame)?;
        pending.set(Some(id));
        *callback.borrow_mut() = Some(frame);

        Ok(Self {
            gate,
            pending,
            callback,
        })
    }

    pub fn is_running(&self) -> bool {
        self.gate.is_open()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.gate.close();
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Breaks the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_gate_never_ticks() {
        let gate = FrameGate::new();
        let mut ticks = 0;
        let mut tick = |_: f64| {
            ticks += 1;
            true
        };
        assert!(gate.run_tick(&mut tick, 16.0));

        gate.close();
        assert!(!gate.run_tick(&mut tick, 32.0));
        assert!(!gate.run_tick(&mut tick, 48.0));
        drop(tick);
        assert_eq!(ticks, 1);
    }

    #[test]
    fn test_finished_tick_closes_gate() {
        let gate = FrameGate::new();
        let mut remaining = 2;
        let mut tick = |_: f64| {
            remaining -= 1;
            remaining > 0
        };
        assert!(gate.run_tick(&mut tick, 0.0));
        assert!(!gate.run_tick(&mut tick, 16.0));
        assert!(!gate.is_open());
    }

    #[test]
    fn test_teardown_during_tick_stops_rearming() {
        let gate = FrameGate::new();
        let owner = gate.clone();
        let mut tick = move |_: f64| {
            owner.close();
            true
        };
        assert!(!gate.run_tick(&mut tick, 0.0));
        assert!(!gate.is_open());
    }
}
