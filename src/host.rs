//! Collaborator traits implemented by the embedding UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! The studio never touches the DOM, the network, or JS libraries directly.
//! The client crate implements these traits against the browser; tests
//! implement them with in-memory recorders. Everything runs on one thread,
//! so the async methods carry no `Send` bound and the sync ones take `&self`
//! (DOM handles are interior-mutable anyway).

#![allow(async_fn_in_trait)]

#[cfg(test)]
#[path = "host_fake.rs"]
pub(crate) mod fake;

use crate::api::GenerationService;
use crate::error::HostError;
use crate::render::RenderProfile;
use crate::theme::ThemeMode;
use crate::view::ViewKind;
use crate::zoom::TRANSFORM_ORIGIN;

/// Unique element id for one render call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderTarget(String);

impl RenderTarget {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RenderTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A rendered vector drawing ready to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graphic {
    pub target: RenderTarget,
    pub svg: String,
}

/// Natural on-screen box of the mounted graphic's container, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSize {
    pub width: f64,
    pub height: f64,
}

impl BoxSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// What the rasterizer should produce: target pixel size plus the style
/// overlay (scale transform and opaque background) applied to the node.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterRequest {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
    pub background: String,
}

impl RasterRequest {
    #[must_use]
    pub fn transform(&self) -> String {
        crate::zoom::scale_transform(self.scale)
    }

    #[must_use]
    pub fn transform_origin(&self) -> &'static str {
        TRANSFORM_ORIGIN
    }
}

/// Encoded image, as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub data_url: String,
}

/// The diagram rendering library.
pub trait RenderEngine {
    /// Re-configure the engine. Affects subsequent renders only.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine refuses the configuration.
    fn initialize(&self, profile: &RenderProfile) -> Result<(), HostError>;

    /// Parse and lay out `source` into a graphic identified by `target`.
    ///
    /// # Errors
    ///
    /// Returns an error when the description cannot be parsed or laid out.
    async fn render(&self, target: &RenderTarget, source: &str) -> Result<Graphic, HostError>;
}

/// The page: view panes, controls, and the diagram display area.
pub trait Surface {
    /// Reveal exactly one view pane, hiding the other three.
    fn show_view(&self, view: ViewKind);
    fn set_error_message(&self, message: &str);
    /// Disable the generate action and swap its label while a request runs.
    fn set_generate_busy(&self, busy: bool);
    /// Zoom, download, and quality controls.
    fn set_controls_enabled(&self, enabled: bool);
    /// Install `graphic`, replacing whatever was mounted.
    fn mount(&self, graphic: &Graphic);
    fn unmount(&self);
    /// Set the mounted graphic's scale transform about its top-left corner.
    fn apply_scale(&self, factor: f64);
    /// Box of the mounted graphic's container, or `None` if nothing is mounted.
    fn mounted_box(&self) -> Option<BoxSize>;
    /// Restyle page chrome (root class, logo) for `theme`.
    fn apply_theme(&self, theme: ThemeMode);
    /// Transient message that leaves the current view intact.
    fn show_notice(&self, message: &str);
}

/// Converts the mounted graphic into a fixed-resolution image.
pub trait Rasterizer {
    /// # Errors
    ///
    /// Returns an error if the node cannot be rasterized.
    async fn rasterize(&self, request: &RasterRequest) -> Result<ImagePayload, HostError>;
}

/// Client-side file save.
pub trait FileSaver {
    /// # Errors
    ///
    /// Returns an error if the download could not be started.
    fn save(&self, filename: &str, payload: &ImagePayload) -> Result<(), HostError>;
}

/// Key-value persistence that survives restarts.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the value could not be written.
    fn store(&self, key: &str, value: &str) -> Result<(), HostError>;
}

/// Everything a [`crate::Studio`] needs from its environment.
pub trait Host: GenerationService + RenderEngine + Surface + Rasterizer + FileSaver + PreferenceStore {}

impl<T> Host for T where T: GenerationService + RenderEngine + Surface + Rasterizer + FileSaver + PreferenceStore {}
