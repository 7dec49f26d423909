use super::display_value::{DisplayValue, DisplayValueSpec};
use super::easing::{progress, Easing};

/// Outcome of a single animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Not triggered yet, nothing to draw.
    Idle,
    /// Display changed, another frame is needed.
    Continue,
    /// Final value reached; the display is frozen from now on.
    Done,
}

/// Per-counter animation state. Driven by frame timestamps in milliseconds,
/// so the same code runs against `performance.now()` in the browser and
/// synthetic clocks in tests.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    value: DisplayValue,
    easing: Easing,
    duration_ms: f64,
    started_at: Option<f64>,
    elapsed_fraction: f64,
    current_display: String,
}

impl AnimationState {
    pub fn new(spec: &DisplayValueSpec) -> Self {
        let value = DisplayValue::decode(spec);
        let easing = Easing::for_decoration(value.decoration());
        let current_display = value.format(0.0);
        Self {
            value,
            easing,
            duration_ms: spec.duration_ms as f64,
            started_at: None,
            elapsed_fraction: 0.0,
            current_display,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed_fraction >= 1.0
    }

    pub fn elapsed_fraction(&self) -> f64 {
        self.elapsed_fraction
    }

    pub fn numeric_target(&self) -> f64 {
        self.value.numeric_target()
    }

    pub fn current_display(&self) -> &str {
        &self.current_display
    }

    /// Starts the run. Returns false if this instance was already triggered;
    /// a counter never replays.
    pub fn trigger(&mut self, now_ms: f64) -> bool {
        if self.started_at.is_some() {
            return false;
        }
        self.started_at = Some(now_ms);
        true
    }

    pub fn step(&mut self, now_ms: f64) -> Step {
        let Some(started_at) = self.started_at else {
            return Step::Idle;
        };
        if self.is_complete() {
            return Step::Done;
        }

        let fraction = progress(now_ms - started_at, self.duration_ms);
        // Frame timestamps can lag the trigger time slightly.
        self.elapsed_fraction = self.elapsed_fraction.max(fraction);

        if self.is_complete() {
            self.current_display = self.value.format_final();
            return Step::Done;
        }

        let current = self
            .easing
            .value_at(self.value.numeric_target(), self.elapsed_fraction);
        self.current_display = self.value.format(current);
        Step::Continue
    }

    /// Jumps straight to the final value, e.g. when the page cannot observe
    /// visibility. Counts as the one trigger for this instance.
    pub fn finish(&mut self, now_ms: f64) {
        if self.started_at.is_none() {
            self.started_at = Some(now_ms);
        }
        self.elapsed_fraction = 1.0;
        self.current_display = self.value.format_final();
    }
}
