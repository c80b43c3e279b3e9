use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("element {0} has the wrong type")]
    WrongElementType(String),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(format!("{:?}", value))
    }
}
