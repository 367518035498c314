use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no browser window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("element `{0}` not found")]
    MissingElement(String),
    #[error("global `{0}` is not loaded")]
    MissingGlobal(&'static str),
    #[error("`{0}` is not a #rrggbb color")]
    InvalidColor(String),
    #[error("malformed json: {0}")]
    Json(String),
    #[error("request failed: {0}")]
    Fetch(String),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|text| text.as_string())
            })
            .unwrap_or_else(|| "unknown".to_string());
        Self::Js(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<gloo_net::Error> for PageError {
    fn from(value: gloo_net::Error) -> Self {
        Self::Fetch(value.to_string())
    }
}

impl From<serde_json::Error> for PageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value.to_string())
    }
}
