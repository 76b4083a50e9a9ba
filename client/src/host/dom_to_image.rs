//! PNG export: `domtoimage` rasterization plus an anchor-click download.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "dom_to_image_test.rs"]
mod dom_to_image_test;

use flownook::error::HostError;
use flownook::host::{ImagePayload, RasterRequest};

/// Options object for `domtoimage.toPng`: output size plus a style overlay
/// that scales the node and paints an opaque background.
#[cfg(any(test, feature = "hydrate"))]
fn raster_options(request: &RasterRequest) -> serde_json::Value {
    serde_json::json!({
        "width": request.width,
        "height": request.height,
        "style": {
            "transform": request.transform(),
            "transformOrigin": request.transform_origin(),
            "background": request.background,
        },
    })
}

/// Rasterize the diagram container.
pub async fn rasterize(request: &RasterRequest) -> Result<ImagePayload, HostError> {
    #[cfg(feature = "hydrate")]
    {
        let node = super::chart::element().ok_or_else(|| HostError::new("diagram container missing"))?;
        let options = super::js::to_js_object(&raster_options(request))?;
        let data_url = super::js::dom_to_png(&node, &options)
            .await
            .map_err(|e| super::js::host_error("domtoimage.toPng", &e))?
            .as_string()
            .ok_or_else(|| HostError::new("domtoimage.toPng returned no data URL"))?;
        Ok(ImagePayload { data_url })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(HostError::new("rasterization is not available on server"))
    }
}

/// Start a browser download of `payload` named `filename`.
pub fn save(filename: &str, payload: &ImagePayload) -> Result<(), HostError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let js_err = |e: wasm_bindgen::JsValue| super::js::host_error("download", &e);
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| HostError::new("no document"))?;
        let body = document.body().ok_or_else(|| HostError::new("no document body"))?;
        let link = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| HostError::new("anchor element has unexpected type"))?;
        link.set_download(filename);
        link.set_href(&payload.data_url);
        body.append_child(&link).map_err(js_err)?;
        link.click();
        body.remove_child(&link).map_err(js_err)?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, payload);
        Err(HostError::new("downloads are not available on server"))
    }
}
