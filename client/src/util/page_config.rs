//! Studio configuration embedded in the page.
//!
//! The server may inline a JSON block as
//! `<script id="flownook-config" type="application/json">`. A missing block
//! means defaults; an invalid one is logged and also means defaults.

#[cfg(test)]
#[path = "page_config_test.rs"]
mod page_config_test;

use flownook::StudioConfig;

pub const CONFIG_ELEMENT_ID: &str = "flownook-config";

/// Parse the raw text of the config block.
pub fn parse(raw: Option<&str>) -> StudioConfig {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return StudioConfig::default();
    };
    match StudioConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::warn!("ignoring invalid #{CONFIG_ELEMENT_ID} block: {e}");
            StudioConfig::default()
        }
    }
}

/// Read the config block from the live document.
pub fn read() -> StudioConfig {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());
        parse(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        StudioConfig::default()
    }
}
