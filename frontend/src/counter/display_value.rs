pub const DEFAULT_DURATION_MS: u32 = 2500;

/// Target of a counter as written in the page content: either a plain
/// number or a decorated string such as `"$12M+"` or `"48hrs"`.
#[derive(Clone, Debug, PartialEq)]
pub enum RawTarget {
    Number(f64),
    Text(String),
}

impl From<f64> for RawTarget {
    fn from(value: f64) -> Self {
        RawTarget::Number(value)
    }
}

impl From<u32> for RawTarget {
    fn from(value: u32) -> Self {
        RawTarget::Number(value as f64)
    }
}

impl From<&str> for RawTarget {
    fn from(value: &str) -> Self {
        RawTarget::Text(value.to_string())
    }
}

impl From<String> for RawTarget {
    fn from(value: String) -> Self {
        RawTarget::Text(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Magnitude {
    Thousand,
    Million,
    Billion,
}

impl Magnitude {
    // Checked in this order, first letter present wins.
    const ALL: [Magnitude; 3] = [Magnitude::Thousand, Magnitude::Million, Magnitude::Billion];

    pub fn letter(self) -> char {
        match self {
            Magnitude::Thousand => 'K',
            Magnitude::Million => 'M',
            Magnitude::Billion => 'B',
        }
    }

    pub fn multiplier(self) -> f64 {
        match self {
            Magnitude::Thousand => 1_000.0,
            Magnitude::Million => 1_000_000.0,
            Magnitude::Billion => 1_000_000_000.0,
        }
    }

    fn detect(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| raw.contains(m.letter()))
    }
}

/// Decoration carried over from the raw target into every rendered string.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Decoration {
    pub has_currency: bool,
    pub has_plus: bool,
    pub is_hours: bool,
    pub has_percent: bool,
    pub magnitude: Option<Magnitude>,
}

impl Decoration {
    fn from_text(raw: &str) -> Self {
        Self {
            has_currency: raw.starts_with('$'),
            has_plus: raw.contains('+'),
            is_hours: raw.to_lowercase().contains("hrs"),
            has_percent: raw.contains('%'),
            magnitude: Magnitude::detect(raw),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayValueSpec {
    pub raw_target: RawTarget,
    pub duration_ms: u32,
    pub decimal_places: usize,
    pub prefix: String,
    pub suffix: String,
}

impl DisplayValueSpec {
    pub fn new(raw_target: impl Into<RawTarget>) -> Self {
        Self {
            raw_target: raw_target.into(),
            duration_ms: DEFAULT_DURATION_MS,
            decimal_places: 0,
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn decimal_places(mut self, decimal_places: usize) -> Self {
        self.decimal_places = decimal_places;
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }
}

/// A decoded target: the number the animation runs toward plus everything
/// needed to render any intermediate value the same way as the final one.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayValue {
    numeric_target: f64,
    decoration: Decoration,
    numeric_source: bool,
    decimal_places: usize,
    prefix: String,
    suffix: String,
}

impl DisplayValue {
    pub fn decode(spec: &DisplayValueSpec) -> Self {
        let (numeric_target, decoration, numeric_source) = match &spec.raw_target {
            RawTarget::Number(value) => {
                let value = if value.is_finite() { *value } else { 0.0 };
                (value, Decoration::default(), true)
            }
            RawTarget::Text(raw) => {
                let decoration = Decoration::from_text(raw);
                let multiplier = decoration.magnitude.map_or(1.0, Magnitude::multiplier);
                let literal: String = raw
                    .chars()
                    .filter(|c| c.is_ascii_digit() || *c == '.')
                    .collect();
                (parse_leading_float(&literal) * multiplier, decoration, false)
            }
        };

        Self {
            numeric_target,
            decoration,
            numeric_source,
            decimal_places: spec.decimal_places,
            prefix: spec.prefix.clone(),
            suffix: spec.suffix.clone(),
        }
    }

    pub fn numeric_target(&self) -> f64 {
        self.numeric_target
    }

    pub fn decoration(&self) -> &Decoration {
        &self.decoration
    }

    pub fn format(&self, value: f64) -> String {
        let decoration = &self.decoration;
        if decoration.is_hours {
            return format!("{}hrs", integer_text(value));
        }

        let base = if self.decimal_places > 0 {
            to_fixed(value, self.decimal_places)
        } else {
            integer_text(value)
        };

        if self.numeric_source {
            return format!("{}{}{}", self.prefix, base, self.suffix);
        }

        let mut numeric = base;
        if let Some(magnitude) = decoration.magnitude {
            let scaled = value / magnitude.multiplier();
            if scaled >= 1.0 {
                numeric = format!("{}{}", to_fixed(scaled, 0), magnitude.letter());
            }
        }

        let mut formatted = String::with_capacity(numeric.len() + 2);
        if decoration.has_currency {
            formatted.push('$');
        }
        formatted.push_str(&numeric);
        if decoration.has_plus {
            formatted.push('+');
        }
        formatted
    }

    pub fn format_final(&self) -> String {
        self.format(self.numeric_target)
    }
}

/// Longest leading decimal literal of a digits-and-dots string, 0 when there
/// is none.
fn parse_leading_float(literal: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, ch) in literal.char_indices() {
        match ch {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    literal[..end].parse::<f64>().unwrap_or(0.0)
}

fn integer_text(value: f64) -> String {
    let floored = value.floor();
    if floored == 0.0 {
        "0".to_string()
    } else if floored.abs() >= EXPONENTIAL_THRESHOLD {
        exponential_text(floored)
    } else {
        format!("{}", floored)
    }
}

/// Magnitude from which JS number-to-string switches to exponent notation.
const EXPONENTIAL_THRESHOLD: f64 = 1e21;
/// Largest fraction length `toFixed` accepts.
const MAX_FRACTION_DIGITS: usize = 100;
/// Enough fraction digits to spell out any f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// `1e21` -> `"1e+21"`, matching JS number-to-string.
fn exponential_text(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// JS `toFixed`: rounds the exact binary value, with exact halves going
/// away from zero. `1.45` is stored just below the half and gives `"1.4"`.
fn to_fixed(value: f64, digits: usize) -> String {
    let digits = digits.min(MAX_FRACTION_DIGITS);
    if !value.is_finite() {
        return format!("{}", value);
    }
    if value.abs() >= EXPONENTIAL_THRESHOLD {
        return exponential_text(value);
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return exact;
    };
    let (kept, rest) = fraction.split_at(digits);
    let round_up = rest.as_bytes().first().map_or(false, |digit| *digit >= b'5');

    let mut number: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    if round_up {
        let mut carry = true;
        for digit in number.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            number.insert(0, b'1');
        }
    }

    let split = number.len() - digits;
    let mut text = String::with_capacity(number.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(number[..split].iter().map(|b| *b as char));
    if digits > 0 {
        text.push('.');
        text.extend(number[split..].iter().map(|b| *b as char));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(raw: impl Into<RawTarget>) -> DisplayValue {
        DisplayValue::decode(&DisplayValueSpec::new(raw))
    }

    #[test]
    fn test_plus_suffix_survives_every_step() {
        let value = decode("5000+");
        assert_eq!(value.numeric_target(), 5000.0);
        assert_eq!(value.format(5000.0), "5000+");
        assert_eq!(value.format(2500.0), "2500+");
        assert_eq!(value.format(0.0), "0+");
    }

    #[test]
    fn test_currency_with_magnitude() {
        let value = decode("$12M+");
        assert_eq!(value.numeric_target(), 12_000_000.0);
        assert_eq!(value.format(12_000_000.0), "$12M+");
        assert_eq!(value.format(6_000_000.0), "$6M+");
    }

    #[test]
    fn test_magnitude_below_one_keeps_unscaled_base() {
        let value = decode("$12M+");
        assert_eq!(value.format(450_000.7), "$450000+");
    }

    #[test]
    fn test_hours_ignores_other_decoration() {
        let value = decode("48hrs");
        assert_eq!(value.numeric_target(), 48.0);
        assert_eq!(value.format(24.0), "24hrs");
        assert_eq!(value.format(47.9), "47hrs");

        let odd = decode("$5K+ hrs");
        assert_eq!(odd.format(2500.0), "2500hrs");
    }

    #[test]
    fn test_thousands_separator_is_stripped() {
        let value = decode("10,000+");
        assert_eq!(value.numeric_target(), 10_000.0);
        assert_eq!(value.format(10_000.0), "10000+");
    }

    #[test]
    fn test_first_magnitude_letter_wins() {
        let value = decode("3KMB");
        assert_eq!(value.decoration().magnitude, Some(Magnitude::Thousand));
        assert_eq!(value.numeric_target(), 3_000.0);
    }

    #[test]
    fn test_scaled_magnitude_rounds_half_up() {
        let value = decode("5K");
        assert_eq!(value.format(2_500.0), "3K");
        assert_eq!(value.format(1_499.0), "1K");
    }

    #[test]
    fn test_malformed_target_runs_toward_zero() {
        let value = decode("lots+");
        assert_eq!(value.numeric_target(), 0.0);
        assert_eq!(value.format_final(), "0+");
        assert_eq!(decode("").numeric_target(), 0.0);
        assert_eq!(decode("...").numeric_target(), 0.0);
    }

    #[test]
    fn test_literal_parses_leading_decimal_only() {
        assert_eq!(decode("1.5.2").numeric_target(), 1.5);
        assert_eq!(decode(".5").numeric_target(), 0.5);
        assert_eq!(decode("2.5M").numeric_target(), 2_500_000.0);
    }

    #[test]
    fn test_numeric_target_uses_prefix_and_suffix() {
        let spec = DisplayValueSpec::new(99.5)
            .decimal_places(1)
            .prefix("~")
            .suffix("%");
        let value = DisplayValue::decode(&spec);
        assert_eq!(value.format(99.5), "~99.5%");
        assert_eq!(value.format(12.25), "~12.3%");
    }

    #[test]
    fn test_text_target_ignores_prefix_and_suffix() {
        let spec = DisplayValueSpec::new("40+").prefix("~").suffix("!");
        assert_eq!(DisplayValue::decode(&spec).format(40.0), "40+");
    }

    #[test]
    fn test_decimal_places_on_decorated_text() {
        let spec = DisplayValueSpec::new("$4.75").decimal_places(2);
        let value = DisplayValue::decode(&spec);
        assert_eq!(value.format(4.75), "$4.75");
        assert_eq!(value.format(1.0), "$1.00");
    }

    #[test]
    fn test_non_finite_number_is_zero() {
        assert_eq!(decode(f64::NAN).numeric_target(), 0.0);
        assert_eq!(decode(f64::INFINITY).format_final(), "0");
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let value = decode(-5.0);
        assert_eq!(value.format(-0.0), "0");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
    }

    #[test]
    fn test_to_fixed_rounds_stored_binary_value() {
        // Both literals sit just below their halfway points once stored.
        assert_eq!(to_fixed(1.45, 1), "1.4");
        assert_eq!(to_fixed(0.285, 2), "0.28");
        let value = DisplayValue::decode(&DisplayValueSpec::new(1.45).decimal_places(1));
        assert_eq!(value.format_final(), "1.4");
    }

    #[test]
    fn test_to_fixed_exact_halves_go_away_from_zero() {
        assert_eq!(to_fixed(12.25, 1), "12.3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(9.96, 1), "10.0");
        assert_eq!(to_fixed(999.5, 0), "1000");
    }

    #[test]
    fn test_to_fixed_caps_fraction_length() {
        let zeros = to_fixed(0.0, 500);
        assert_eq!(zeros.len(), "0.".len() + 100);
        assert!(zeros.starts_with("0.000"));
        assert!(!zeros.contains("NaN"));
        assert_eq!(to_fixed(1e300, 20), "1e+300");
    }

    #[test]
    fn test_huge_values_use_exponent_notation() {
        assert_eq!(integer_text(1e21), "1e+21");
        assert_eq!(integer_text(1.5e22), "1.5e+22");
        assert_eq!(integer_text(123_456.9), "123456");
        assert_eq!(to_fixed(-1.5e22, 0), "-1.5e+22");
    }

    #[test]
    fn test_percent_is_recorded_for_easing() {
        let value = decode("98%");
        assert!(value.decoration().has_percent);
        assert_eq!(value.format_final(), "98");
    }
}
