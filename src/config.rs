//! Studio configuration.
//!
//! Every field has a default, so an embedding page only needs to ship the
//! keys it wants to override. The client reads the JSON from an inline
//! `<script type="application/json">` block; tests build it directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::export::DownloadQuality;
use crate::render::RenderSettings;
use crate::zoom::ZoomLimits;

pub const DEFAULT_API_BASE: &str = "/api/flowchart";
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_FILENAME_PREFIX: &str = "flowchart";
pub const DEFAULT_QUALITY: u32 = 2000;
pub const DEFAULT_QUALITIES: [u32; 4] = [1000, 2000, 4000, 8000];

/// Typed configuration for a [`crate::Studio`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StudioConfig {
    pub api_base: String,
    pub theme_storage_key: String,
    pub zoom: ZoomLimits,
    pub download_qualities: Vec<u32>,
    pub default_quality: u32,
    pub filename_prefix: String,
    pub render: RenderSettings,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            zoom: ZoomLimits::default(),
            download_qualities: DEFAULT_QUALITIES.to_vec(),
            default_quality: DEFAULT_QUALITY,
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_owned(),
            render: RenderSettings::default(),
        }
    }
}

impl StudioConfig {
    /// Parse and validate a JSON override block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON, or any error from
    /// [`StudioConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.api_base = config.api_base.trim_end_matches('/').to_owned();
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ZoomLimits { min, max, step, initial } = self.zoom;
        if min > max {
            return Err(ConfigError::ZoomRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::ZoomStep(step));
        }
        if initial < min || initial > max {
            return Err(ConfigError::ZoomInitial { initial, min, max });
        }
        if self.download_qualities.is_empty() {
            return Err(ConfigError::NoQualities);
        }
        if !self.download_qualities.contains(&self.default_quality) {
            return Err(ConfigError::UnknownQuality(self.default_quality));
        }
        Ok(())
    }

    #[must_use]
    pub fn generate_endpoint(&self) -> String {
        format!("{}/generate", self.api_base)
    }

    #[must_use]
    pub fn examples_endpoint(&self) -> String {
        format!("{}/examples", self.api_base)
    }

    /// Configured quality choices, in configured order.
    #[must_use]
    pub fn qualities(&self) -> Vec<DownloadQuality> {
        self.download_qualities.iter().copied().map(DownloadQuality::new).collect()
    }

    /// Resolve a raw pixel width against the configured choices.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownQuality`] when `pixels` is not offered.
    pub fn quality(&self, pixels: u32) -> Result<DownloadQuality, ConfigError> {
        if self.download_qualities.contains(&pixels) {
            Ok(DownloadQuality::new(pixels))
        } else {
            Err(ConfigError::UnknownQuality(pixels))
        }
    }
}
