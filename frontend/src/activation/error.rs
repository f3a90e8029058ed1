use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures inside the activation path.
///
/// None of these reach the visitor: the controller logs them and the
/// placeholder simply stays a thumbnail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivationError {
    #[error("no document is available")]
    MissingDocument,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("YouTube player API failed to load: {0}")]
    ScriptLoad(String),
}

impl ActivationError {
    pub fn dom(value: JsValue) -> Self {
        ActivationError::Dom(describe(&value))
    }

    pub fn script_load(value: JsValue) -> Self {
        ActivationError::ScriptLoad(describe(&value))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
