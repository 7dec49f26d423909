use log::Level;

const DEFAULT_COUNTER_DURATION_MS: u32 = 2500;
const DEFAULT_CHAT_REPLY_DELAY_MS: u32 = 1000;
const DEFAULT_VIEWPORT_MARGIN: &str = "-100px";
const DEFAULT_SCROLL_HEADER_OFFSET: f64 = 80.0;
const DEFAULT_SCROLLED_THRESHOLD: f64 = 20.0;
const DEFAULT_TOAST_DURATION_MS: u32 = 4000;

// Values are baked in at build time, e.g. `COUNTER_DURATION_MS=1800 trunk build`.

pub fn get_counter_duration_ms() -> u32 {
    parse_or(option_env!("COUNTER_DURATION_MS"), DEFAULT_COUNTER_DURATION_MS)
}

pub fn get_chat_reply_delay_ms() -> u32 {
    parse_or(option_env!("CHAT_REPLY_DELAY_MS"), DEFAULT_CHAT_REPLY_DELAY_MS)
}

/// Root margin handed to the IntersectionObserver. Negative values make an
/// element count as visible only once it is that far inside the viewport.
pub fn get_viewport_margin() -> &'static str {
    option_env!("VIEWPORT_MARGIN").unwrap_or(DEFAULT_VIEWPORT_MARGIN)
}

pub fn get_scroll_header_offset() -> f64 {
    parse_or(option_env!("SCROLL_HEADER_OFFSET"), DEFAULT_SCROLL_HEADER_OFFSET)
}

pub fn get_scrolled_threshold() -> f64 {
    parse_or(option_env!("SCROLLED_THRESHOLD"), DEFAULT_SCROLLED_THRESHOLD)
}

pub fn get_toast_duration_ms() -> u32 {
    parse_or(option_env!("TOAST_DURATION_MS"), DEFAULT_TOAST_DURATION_MS)
}

pub fn get_log_level() -> Level {
    parse_or(option_env!("LOG_LEVEL"), Level::Info)
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
