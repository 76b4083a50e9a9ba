//! `mermaid` render engine bindings.
//!
//! `mermaid.initialize` is global and only affects later renders, so the
//! studio re-initializes before every render with the active theme.

#![allow(clippy::unused_async)]

use flownook::error::HostError;
use flownook::host::RenderTarget;
use flownook::render::RenderProfile;

pub fn initialize(profile: &RenderProfile) -> Result<(), HostError> {
    #[cfg(feature = "hydrate")]
    {
        let json = profile.to_json().map_err(|e| HostError::new(format!("encode render profile: {e}")))?;
        let config = js_sys::JSON::parse(&json).map_err(|e| super::js::host_error("JSON.parse", &e))?;
        super::js::mermaid_initialize(&config).map_err(|e| super::js::host_error("mermaid.initialize", &e))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = profile;
        Err(HostError::new("mermaid is not available on server"))
    }
}

/// Render `source` under element id `target` and return the SVG markup.
pub async fn render(target: &RenderTarget, source: &str) -> Result<String, HostError> {
    #[cfg(feature = "hydrate")]
    {
        let result = super::js::mermaid_render(target.as_str(), source)
            .await
            .map_err(|e| super::js::host_error("mermaid.render", &e))?;
        js_sys::Reflect::get(&result, &"svg".into())
            .map_err(|e| super::js::host_error("mermaid.render result", &e))?
            .as_string()
            .ok_or_else(|| HostError::new("mermaid.render returned no svg"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, source);
        Err(HostError::new("mermaid is not available on server"))
    }
}
