use super::display_value::Decoration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Plain ease-out-cubic, used for percentages.
    Cubic,
    /// 60/40 mix of ease-out-cubic and ease-out-quint.
    Blend,
}

impl Easing {
    pub fn for_decoration(decoration: &Decoration) -> Self {
        if decoration.has_percent {
            Easing::Cubic
        } else {
            Easing::Blend
        }
    }

    pub fn apply(self, progress: f64) -> f64 {
        match self {
            Easing::Cubic => ease_out_cubic(progress),
            Easing::Blend => 0.6 * ease_out_cubic(progress) + 0.4 * ease_out_quint(progress),
        }
    }

    /// Value shown at `progress`. Exactly `target` once progress reaches 1.
    pub fn value_at(self, target: f64, progress: f64) -> f64 {
        if progress >= 1.0 {
            target
        } else {
            self.apply(progress) * target
        }
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

pub fn ease_out_quint(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(5)
}

/// Fraction of the run completed, clamped to `[0, 1]`. A zero duration
/// completes immediately.
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}
