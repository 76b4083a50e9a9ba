//! Headless controller for the text-to-flowchart studio.
//!
//! This crate owns everything about the studio that has state or ordering
//! rules: which view is on screen, the generation round-trip, rendering the
//! returned diagram description, zoom, and scaled PNG export. The browser
//! (DOM nodes, `fetch`, the `mermaid` and `domtoimage` globals, `localStorage`)
//! is reached only through the collaborator traits in [`host`] and
//! [`api::GenerationService`], so the whole state machine runs under plain
//! `cargo test`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`studio`] | [`studio::Studio`], the single controller every UI action goes through |
//! | [`view`] | View-state machine and control enablement |
//! | [`session`] | One generate request/response cycle and request tokens |
//! | [`render`] | Theme-aware render profile and graphic installation |
//! | [`zoom`] | Bounded zoom factor and its transform |
//! | [`export`] | Download quality, export plan, rasterize + save |
//! | [`theme`] | Persisted light/dark preference |
//! | [`catalog`] | Example descriptions with a built-in fallback |
//! | [`shortcuts`] | Keyboard shortcut mapping |
//! | [`api`] | Wire types for the generation service |
//! | [`host`] | Collaborator traits implemented by the embedding UI |
//! | [`config`] | Studio configuration |
//! | [`error`] | User-facing error taxonomy |

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod host;
pub mod render;
pub mod session;
pub mod shortcuts;
pub mod studio;
pub mod theme;
pub mod view;
pub mod zoom;

pub use config::StudioConfig;
pub use error::FlowError;
pub use studio::Studio;
pub use theme::ThemeMode;
pub use view::{ViewKind, ViewState};
