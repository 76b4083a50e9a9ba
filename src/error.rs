//! User-facing error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is caught at the boundary of the operation that produced it
//! and turned into a [`FlowError`]. Its `Display` text is exactly what the
//! error view (or the export notice) shows, so no caller formats messages on
//! its own.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when the generate action is used with blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a description of your process";
/// Message shown for transport failures and malformed service responses.
pub const NETWORK_MESSAGE: &str = "Network error. Please check your connection and try again.";
/// Fallback when the service rejects a request without giving a reason.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to generate flowchart";
/// Message shown when the render engine cannot process a description.
pub const RENDER_MESSAGE: &str = "Failed to render flowchart. Please try a different description.";
/// Message shown when rasterization or the file save fails.
pub const EXPORT_MESSAGE: &str = "Download failed. Please try again.";
/// Message shown when export is attempted with nothing on screen.
pub const NO_CONTENT_MESSAGE: &str = "No flowchart to download";

/// Errors surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Blank input; never reaches the network.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    Validation,
    /// Transport failure or a response body that could not be understood.
    #[error("{}", NETWORK_MESSAGE)]
    Network { detail: String },
    /// The service answered but declined the request.
    #[error("{reason}")]
    Rejected { reason: String },
    /// The render engine could not parse or lay out the description.
    #[error("{}", RENDER_MESSAGE)]
    Render { detail: String },
    /// Rasterization or the download itself failed.
    #[error("{}", EXPORT_MESSAGE)]
    Export { detail: String },
    /// Export was attempted with no graphic mounted.
    #[error("{}", NO_CONTENT_MESSAGE)]
    NoContent,
}

impl FlowError {
    /// Build a rejection, substituting the generic message for a missing or
    /// blank reason.
    #[must_use]
    pub fn rejected(reason: Option<String>) -> Self {
        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_owned());
        Self::Rejected { reason }
    }

    /// Whether this error must leave the current view untouched.
    ///
    /// Export failures are reported as a notice so an on-screen diagram is
    /// never blanked by a failed download.
    #[must_use]
    pub fn preserves_view(&self) -> bool {
        matches!(self, Self::Export { .. } | Self::NoContent)
    }
}

/// Opaque failure reported by a browser collaborator (render engine,
/// rasterizer, file saver, preference store).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HostError(pub String);

impl HostError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Invalid studio configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(String),
    #[error("zoom minimum {min} exceeds maximum {max}")]
    ZoomRange { min: f64, max: f64 },
    #[error("initial zoom {initial} outside [{min}, {max}]")]
    ZoomInitial { initial: f64, min: f64, max: f64 },
    #[error("zoom step must be positive, got {0}")]
    ZoomStep(f64),
    #[error("at least one download quality is required")]
    NoQualities,
    #[error("download quality {0} is not one of the configured choices")]
    UnknownQuality(u32),
}
