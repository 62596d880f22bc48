//! Error type for the scene controller's host boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    #[error("required element not found: #{0}")]
    MissingElement(String),
    #[error("invalid scene config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("host call failed: {0}")]
    Host(String),
}

impl SceneError {
    /// Wrap a thrown JS value, keeping whatever text it carries.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Host(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<SceneError> for JsValue {
    fn from(err: SceneError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
