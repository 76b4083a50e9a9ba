//! Raw bindings to the JS libraries loaded by the page shell.

use flownook::error::HostError;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = mermaid, js_name = initialize)]
    pub fn mermaid_initialize(config: &JsValue) -> Result<(), JsValue>;

    /// Resolves to `{ svg, bindFunctions }`.
    #[wasm_bindgen(catch, js_namespace = mermaid, js_name = render)]
    pub async fn mermaid_render(id: &str, source: &str) -> Result<JsValue, JsValue>;

    /// Resolves to a `data:image/png;base64,...` URL.
    #[wasm_bindgen(catch, js_namespace = domtoimage, js_name = toPng)]
    pub async fn dom_to_png(node: &web_sys::Element, options: &JsValue) -> Result<JsValue, JsValue>;
}

/// Turn a thrown JS value into a host error, preferring `Error.message`.
pub fn host_error(context: &str, value: &JsValue) -> HostError {
    let detail = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
    };
    HostError::new(format!("{context}: {detail}"))
}

/// Convert a serde value into a plain JS object.
pub fn to_js_object(value: &serde_json::Value) -> Result<JsValue, HostError> {
    js_sys::JSON::parse(&value.to_string()).map_err(|e| host_error("JSON.parse", &e))
}
