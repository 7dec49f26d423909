use once_cell::sync::Lazy;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

/// One blurred circle drifting behind a section.
#[derive(Clone, Debug, PartialEq)]
pub struct FloatingElement {
    pub size_px: u32,
    pub drift_x: i32,
    pub drift_y: i32,
    pub duration_s: f64,
    pub delay_s: f64,
    pub opacity: f64,
    pub left_pct: u32,
    pub top_pct: u32,
}

impl FloatingElement {
    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {left}%; top: {top}%; opacity: {opacity:.3}; \
             --drift-x: {x}px; --drift-y: {y}px; animation-duration: {duration:.2}s; animation-delay: {delay:.2}s;",
            size = self.size_px,
            left = self.left_pct,
            top = self.top_pct,
            opacity = self.opacity,
            x = self.drift_x,
            y = self.drift_y,
            duration = self.duration_s,
            delay = self.delay_s,
        )
    }
}

static LOW_DENSITY_ELEMENTS: Lazy<Vec<FloatingElement>> = Lazy::new(|| generate_elements(5, 42.0));
static MEDIUM_DENSITY_ELEMENTS: Lazy<Vec<FloatingElement>> = Lazy::new(|| generate_elements(10, 100.0));
static HIGH_DENSITY_ELEMENTS: Lazy<Vec<FloatingElement>> = Lazy::new(|| generate_elements(15, 150.0));

pub fn elements_for(density: Density) -> &'static [FloatingElement] {
    match density {
        Density::Low => &LOW_DENSITY_ELEMENTS,
        Density::Medium => &MEDIUM_DENSITY_ELEMENTS,
        Density::High => &HIGH_DENSITY_ELEMENTS,
    }
}

/// Pseudo-random value in `[0, 1)` that depends only on its inputs.
pub fn deterministic_random(seed: f64, index: f64) -> f64 {
    let value = (seed + index * 1000.0).sin() * 10000.0;
    (value - value.floor()).abs()
}

pub fn generate_elements(count: usize, seed: f64) -> Vec<FloatingElement> {
    (0..count)
        .map(|i| {
            let i = i as f64;
            let rand = |offset: f64| deterministic_random(seed, i + offset);
            FloatingElement {
                size_px: (rand(0.0) * 60.0).floor() as u32 + 20,
                drift_x: (rand(0.1) * 200.0).floor() as i32 - 100,
                drift_y: (rand(0.2) * 200.0).floor() as i32 - 100,
                duration_s: rand(0.3) * 5.0 + 3.0,
                delay_s: rand(0.4) * 2.0,
                opacity: rand(0.5) * 0.2 + 0.03,
                left_pct: (rand(0.6) * 100.0).floor() as u32,
                top_pct: (rand(0.7) * 100.0).floor() as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_elements() {
        assert_eq!(generate_elements(8, 7.0), generate_elements(8, 7.0));
        assert_ne!(generate_elements(8, 7.0), generate_elements(8, 8.0));
    }

    #[test]
    fn test_density_sizes() {
        assert_eq!(elements_for(Density::Low).len(), 5);
        assert_eq!(elements_for(Density::Medium).len(), 10);
        assert_eq!(elements_for(Density::High).len(), 15);
    }

    #[test]
    fn test_properties_stay_in_range() {
        for density in [Density::Low, Density::Medium, Density::High] {
            for element in elements_for(density) {
                assert!((20..80).contains(&element.size_px));
                assert!((-100..100).contains(&element.drift_x));
                assert!((-100..100).contains(&element.drift_y));
                assert!((3.0..8.0).contains(&element.duration_s));
                assert!((0.0..2.0).contains(&element.delay_s));
                assert!((0.03..0.23).contains(&element.opacity));
                assert!(element.left_pct < 100);
                assert!(element.top_pct < 100);
            }
        }
    }

    #[test]
    fn test_random_is_unit_interval() {
        for i in 0..200 {
            let value = deterministic_random(42.0, i as f64 * 0.37);
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_style_carries_drift_variables() {
        let element = &elements_for(Density::Low)[0];
        let style = element.style();
        assert!(style.contains(&format!("--drift-x: {}px", element.drift_x)));
        assert!(style.contains(&format!("width: {}px", element.size_px)));
    }
}
