use frontend::counter::{AnimationState, DisplayValueSpec, Step};

const FRAME_MS: f64 = 16.0;

/// Runs frames until the animation settles and returns every display shown.
fn run(spec: &DisplayValueSpec, trigger_at: f64) -> Vec<String> {
    let mut state = AnimationState::new(spec);
    let mut shown = vec![state.current_display().to_string()];
    assert!(state.trigger(trigger_at));

    let mut now = trigger_at;
    loop {
        now += FRAME_MS;
        let step = state.step(now);
        shown.push(state.current_display().to_string());
        if step == Step::Done {
            break;
        }
        assert!(now < trigger_at + 10_000.0, "animation never finished");
    }
    assert_eq!(state.step(now + 1_000.0), Step::Done);
    assert_eq!(state.current_display(), shown.last().map(String::as_str).unwrap_or_default());
    shown
}

fn leading_number(display: &str) -> f64 {
    display
        .trim_start_matches('$')
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>()
        .parse()
        .unwrap_or(0.0)
}

#[test]
fn test_plus_counter_climbs_to_target() {
    let shown = run(&DisplayValueSpec::new("5000+").duration_ms(2500), 400.0);

    assert_eq!(shown.first().map(String::as_str), Some("0+"));
    assert_eq!(shown.last().map(String::as_str), Some("5000+"));
    assert!(shown.iter().all(|display| display.ends_with('+')));
    let numbers: Vec<f64> = shown.iter().map(|d| leading_number(d)).collect();
    assert!(numbers.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_hours_counter_keeps_unit() {
    let shown = run(&DisplayValueSpec::new("48hrs").duration_ms(1000), 0.0);
    assert!(shown.iter().all(|display| display.ends_with("hrs")));
    assert_eq!(shown.last().map(String::as_str), Some("48hrs"));
}

#[test]
fn test_currency_counter_lands_on_decorated_target() {
    let shown = run(&DisplayValueSpec::new("$12M+").duration_ms(2500), 0.0);
    assert!(shown.iter().all(|display| display.starts_with('$') && display.ends_with('+')));
    assert_eq!(shown.last().map(String::as_str), Some("$12M+"));
}

#[test]
fn test_numeric_target_with_prefix_and_decimals() {
    let spec = DisplayValueSpec::new(99.5)
        .duration_ms(500)
        .decimal_places(1)
        .prefix("~")
        .suffix("%");
    let shown = run(&spec, 0.0);
    assert_eq!(shown.first().map(String::as_str), Some("~0.0%"));
    assert_eq!(shown.last().map(String::as_str), Some("~99.5%"));
}
