use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("invalid site configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Browser(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SiteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Browser(message)
    }
}
