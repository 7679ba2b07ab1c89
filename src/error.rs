use wasm_bindgen::JsValue;

/// Failures at the crate boundary. Route computation itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum WayfinderError {
    #[error("Invalid {what}: {source}")]
    InvalidInput {
        what: &'static str,
        #[source]
        source: serde_wasm_bindgen::Error,
    },
    #[error("Failed to serialize result: {0}")]
    Serialize(String),
    #[error("Catalog JSON parse error: {0}")]
    CatalogJson(#[from] serde_json::Error),
}

impl WayfinderError {
    pub fn invalid(what: &'static str) -> impl FnOnce(serde_wasm_bindgen::Error) -> Self {
        move |source| Self::InvalidInput { what, source }
    }
}

impl From<WayfinderError> for JsValue {
    fn from(e: WayfinderError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
