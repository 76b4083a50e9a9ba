//! Bounded zoom factor applied as a top-left anchored scale transform.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use serde::Deserialize;

use crate::host::Surface;

/// CSS transform origin for on-screen zoom and export scaling.
pub const TRANSFORM_ORIGIN: &str = "top left";

// Rounding grain that keeps repeated `+= step` from drifting.
const ZOOM_GRAIN: f64 = 1e6;

/// Zoom bounds and step.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub initial: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: 0.5, max: 3.0, step: 0.2, initial: 1.0 }
    }
}

/// CSS `transform` value for a scale factor.
#[must_use]
pub fn scale_transform(factor: f64) -> String {
    format!("scale({factor})")
}

/// Owns the zoom factor. Nothing else mutates it.
#[derive(Debug, Clone)]
pub struct ZoomController {
    factor: f64,
    limits: ZoomLimits,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl ZoomController {
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self { factor: limits.initial, limits }
    }

    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Zoom as a whole percentage for display (`1.2` → `120`).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.factor * 100.0).round() as u32
    }

    #[must_use]
    pub fn at_max(&self) -> bool {
        self.factor >= self.limits.max
    }

    #[must_use]
    pub fn at_min(&self) -> bool {
        self.factor <= self.limits.min
    }

    /// Step up, saturating at the maximum. A no-op when nothing is mounted.
    pub fn zoom_in<S: Surface>(&mut self, surface: &S, mounted: bool) -> f64 {
        self.step_by(surface, mounted, self.limits.step)
    }

    /// Step down, saturating at the minimum. A no-op when nothing is mounted.
    pub fn zoom_out<S: Surface>(&mut self, surface: &S, mounted: bool) -> f64 {
        self.step_by(surface, mounted, -self.limits.step)
    }

    /// Push the current factor to the mounted graphic. Idempotent.
    pub fn apply<S: Surface>(&self, surface: &S, mounted: bool) {
        if mounted {
            surface.apply_scale(self.factor);
        }
    }

    pub fn reset(&mut self) {
        self.factor = self.limits.initial;
    }

    fn step_by<S: Surface>(&mut self, surface: &S, mounted: bool, delta: f64) -> f64 {
        if !mounted {
            return self.factor;
        }
        let next = ((self.factor + delta) * ZOOM_GRAIN).round() / ZOOM_GRAIN;
        self.factor = next.clamp(self.limits.min, self.limits.max);
        tracing::debug!(factor = self.factor, "zoom changed");
        self.apply(surface, mounted);
        self.factor
    }
}
