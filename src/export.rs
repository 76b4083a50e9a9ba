//! Scaled PNG export of the mounted graphic.
//!
//! Export resolution comes from the selected [`DownloadQuality`] and the
//! graphic container's natural box, never from the live zoom transform: the
//! node is re-scaled so its width lands exactly on the requested pixel count.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::config::DEFAULT_QUALITY;
use crate::error::FlowError;
use crate::host::{BoxSize, FileSaver, ImagePayload, RasterRequest, Rasterizer, Surface};
use crate::theme::ThemeMode;

/// Target export width in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DownloadQuality(u32);

impl Default for DownloadQuality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

impl DownloadQuality {
    #[must_use]
    pub fn new(pixels: u32) -> Self {
        Self(pixels)
    }

    #[must_use]
    pub fn pixels(self) -> u32 {
        self.0
    }

    /// Resolution label in kilo-pixels: `2000` → `"2K"`, `1500` → `"1.5K"`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}K", f64::from(self.0) / 1000.0)
    }
}

impl std::fmt::Display for DownloadQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Download filename for `quality`, e.g. `flowchart-2K.png`.
#[must_use]
pub fn export_filename(prefix: &str, quality: DownloadQuality) -> String {
    format!("{prefix}-{}.png", quality.label())
}

/// Everything decided before rasterization starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    pub quality: DownloadQuality,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
    pub background: String,
    pub filename: String,
}

impl ExportPlan {
    /// Scale `natural` so its width equals the requested quality.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Export`] if the box has no usable width.
    pub fn compute(
        quality: DownloadQuality,
        natural: BoxSize,
        theme: ThemeMode,
        prefix: &str,
    ) -> Result<Self, FlowError> {
        if !natural.width.is_finite() || natural.width <= 0.0 {
            return Err(FlowError::Export { detail: format!("graphic has no width ({})", natural.width) });
        }
        let scale = f64::from(quality.pixels()) / natural.width;
        Ok(Self {
            quality,
            scale,
            width: natural.width * scale,
            height: natural.height * scale,
            background: theme.background().to_owned(),
            filename: export_filename(prefix, quality),
        })
    }

    #[must_use]
    pub fn raster_request(&self) -> RasterRequest {
        RasterRequest {
            width: self.width,
            height: self.height,
            scale: self.scale,
            background: self.background.clone(),
        }
    }
}

/// Plan, rasterize, and save. Each stage is separate so the studio can drop a
/// stale result between the rasterize await and the save.
#[derive(Debug, Clone)]
pub struct ExportPipeline {
    filename_prefix: String,
}

impl ExportPipeline {
    #[must_use]
    pub fn new(filename_prefix: impl Into<String>) -> Self {
        Self { filename_prefix: filename_prefix.into() }
    }

    /// Build the plan for the currently mounted graphic. `mounted_theme` is
    /// the theme that graphic was drawn in, or `None` when nothing is shown.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::NoContent`] when nothing is mounted, or
    /// [`FlowError::Export`] when the mounted box is degenerate.
    pub fn prepare<S: Surface>(
        &self,
        surface: &S,
        mounted_theme: Option<ThemeMode>,
        quality: DownloadQuality,
    ) -> Result<ExportPlan, FlowError> {
        let theme = mounted_theme.ok_or(FlowError::NoContent)?;
        let natural = surface.mounted_box().ok_or(FlowError::NoContent)?;
        ExportPlan::compute(quality, natural, theme, &self.filename_prefix)
    }

    /// # Errors
    ///
    /// Returns [`FlowError::Export`] if the rasterizer fails.
    pub async fn rasterize<R: Rasterizer>(&self, rasterizer: &R, plan: &ExportPlan) -> Result<ImagePayload, FlowError> {
        rasterizer.rasterize(&plan.raster_request()).await.map_err(|e| {
            tracing::warn!(error = %e, quality = plan.quality.pixels(), "rasterization failed");
            FlowError::Export { detail: e.to_string() }
        })
    }

    /// # Errors
    ///
    /// Returns [`FlowError::Export`] if the download could not be started.
    pub fn deliver<F: FileSaver>(&self, saver: &F, plan: &ExportPlan, payload: &ImagePayload) -> Result<(), FlowError> {
        saver.save(&plan.filename, payload).map_err(|e| {
            tracing::warn!(error = %e, filename = %plan.filename, "download failed");
            FlowError::Export { detail: e.to_string() }
        })?;
        tracing::info!(filename = %plan.filename, width = plan.width, height = plan.height, "flowchart exported");
        Ok(())
    }
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_FILENAME_PREFIX)
    }
}
