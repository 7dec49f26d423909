use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::error::DomError;

/// Section id for in-page anchors like `#contact`. A bare `#` is not an
/// anchor.
pub fn anchor_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Absolute scroll position that puts an element just below the fixed
/// header.
pub fn scroll_target(element_top: f64, scroll_y: f64, header_offset: f64) -> f64 {
    element_top + scroll_y - header_offset
}

pub fn smooth_scroll_to(top: f64) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Scrolls to the element with `id`, keeping the header clear, and records
/// the anchor in the history without jumping.
pub fn scroll_to_section(id: &str, header_offset: f64) -> Result<bool, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let Some(element) = document.get_element_by_id(id) else {
        return Ok(false);
    };

    let top = element.get_bounding_client_rect().top();
    let scroll_y = window.scroll_y()?;
    smooth_scroll_to(scroll_target(top, scroll_y, header_offset))?;

    let history = window.history()?;
    history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("#{}", id)))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id() {
        assert_eq!(anchor_id("#how-it-works"), Some("how-it-works"));
        assert_eq!(anchor_id("#"), None);
        assert_eq!(anchor_id("/pricing"), None);
        assert_eq!(anchor_id("https://example.com/#contact"), None);
    }

    #[test]
    fn test_scroll_target_accounts_for_header() {
        assert_eq!(scroll_target(300.0, 1200.0, 80.0), 1420.0);
        assert_eq!(scroll_target(-50.0, 100.0, 80.0), -30.0);
    }
}
