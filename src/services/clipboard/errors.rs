//! Clipboard error types
//!
//! Every failure of the copy handler is reported through `CopyError` so the
//! caller can log or surface it. None of them are fatal to the page.

use std::fmt;
use wasm_bindgen::JsValue;

/// Copy handler error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyError {
    /// No element with the given id exists in the document
    ElementNotFound { id: String },
    /// Window, document or selection object is not available
    HostUnavailable(String),
    /// Building or applying the selection range failed
    SelectionFailed(String),
    /// The copy command threw instead of returning a status
    CommandFailed(String),
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ElementNotFound { id } => write!(f, "Element not found: #{}", id),
            Self::HostUnavailable(msg) => write!(f, "Browser API unavailable: {}", msg),
            Self::SelectionFailed(msg) => write!(f, "Failed to select content: {}", msg),
            Self::CommandFailed(msg) => write!(f, "Copy command failed: {}", msg),
        }
    }
}

impl std::error::Error for CopyError {}

/// Result type alias for clipboard operations
pub type CopyResult<T> = Result<T, CopyError>;

impl CopyError {
    /// Check if the target element was missing
    pub fn is_element_missing(&self) -> bool {
        matches!(self, Self::ElementNotFound { .. })
    }

    /// Wrap a JS exception as a selection failure
    pub fn selection(context: &str, err: JsValue) -> Self {
        Self::SelectionFailed(format!("{}: {}", context, js_error_message(&err)))
    }

    /// Wrap a JS exception as a command failure
    pub fn command(context: &str, err: JsValue) -> Self {
        Self::CommandFailed(format!("{}: {}", context, js_error_message(&err)))
    }
}

/// Extract a readable message from a thrown JS value
pub fn js_error_message(err: &JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", err))
}
