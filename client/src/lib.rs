//! # flownook-client
//!
//! Leptos + WASM frontend for the flowchart studio.
//!
//! The headless `flownook` crate owns every state transition; this crate
//! supplies the browser side of its collaborator traits (HTTP, `mermaid`,
//! `domtoimage`, `localStorage`, DOM nodes) and the components that drive it.
//! Component code never mutates view state directly: it calls a `Studio`
//! action and renders whatever the host wrote into [`state::ui::UiState`].

pub mod app;
pub mod components;
pub mod host;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and hydrate the SSR shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
