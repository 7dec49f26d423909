use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures from the browser plumbing around the page widgets.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomError {
    #[error("No window object available")]
    NoWindow,
    #[error("No document object available")]
    NoDocument,
    #[error("Element is not mounted")]
    NotMounted,
    #[error("Failed to attach visibility observer: {0}")]
    ObserverError(String),
    #[error("Failed to schedule animation frame: {0}")]
    FrameError(String),
    #[error("Failed to register event listener: {0}")]
    ListenerError(String),
    #[error("DOM call failed: {0}")]
    JsError(String),
}

impl DomError {
    pub fn observer(err: JsValue) -> Self {
        DomError::ObserverError(js_text(&err))
    }

    pub fn frame(err: JsValue) -> Self {
        DomError::FrameError(js_text(&err))
    }

    pub fn listener(err: JsValue) -> Self {
        DomError::ListenerError(js_text(&err))
    }
}

impl From<JsValue> for DomError {
    fn from(err: JsValue) -> Self {
        DomError::JsError(js_text(&err))
    }
}

fn js_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Errors raised while loading a keyword response table from JSON.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid response table: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Response table keyword must not be empty (entry {0})")]
    EmptyKeyword(usize),
}
