//! The diagram container node.
//!
//! Rendered SVG is injected as raw markup. The container is always present
//! in the DOM (hidden outside the diagram view) so it can be filled before
//! the view switches.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use flownook::host::BoxSize;
#[cfg(feature = "hydrate")]
use flownook::zoom::{TRANSFORM_ORIGIN, scale_transform};

pub const CHART_ELEMENT_ID: &str = "mermaid-chart";

#[cfg(feature = "hydrate")]
pub(crate) fn element() -> Option<web_sys::Element> {
    web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(CHART_ELEMENT_ID))
}

#[cfg(feature = "hydrate")]
fn mounted_svg() -> Option<web_sys::SvgElement> {
    use wasm_bindgen::JsCast;

    let svg = element()?.query_selector("svg").ok().flatten()?;
    svg.dyn_into::<web_sys::SvgElement>().ok()
}

/// Replace the container's content with `svg`.
pub fn mount(svg: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = element() {
            el.set_inner_html(svg);
        } else {
            leptos::logging::warn!("#{CHART_ELEMENT_ID} missing; graphic not mounted");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = svg;
    }
}

pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = element() {
            el.set_inner_html("");
        }
    }
}

/// Scale the mounted SVG about its top-left corner.
pub fn apply_scale(factor: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(svg) = mounted_svg() else {
            return;
        };
        let css = svg.style();
        let styled = css
            .set_property("transform", &scale_transform(factor))
            .and_then(|()| css.set_property("transform-origin", TRANSFORM_ORIGIN));
        if let Err(e) = styled {
            leptos::logging::warn!("failed to apply zoom: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = factor;
    }
}

/// Layout box of the container, if it holds a graphic.
pub fn mounted_box() -> Option<BoxSize> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        mounted_svg()?;
        let html = element()?.dyn_into::<web_sys::HtmlElement>().ok()?;
        box_from_offsets(html.offset_width(), html.offset_height())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// A collapsed container (zero width) has nothing to export.
#[cfg(any(test, feature = "hydrate"))]
fn box_from_offsets(width: i32, height: i32) -> Option<BoxSize> {
    (width > 0 && height >= 0).then(|| BoxSize::new(f64::from(width), f64::from(height)))
}
