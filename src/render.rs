//! Theme-aware rendering of diagram descriptions.
//!
//! The engine is re-initialized before every render because it only styles
//! graphics produced after `initialize`; already-mounted graphics keep the
//! colors they were drawn with.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::cell::Cell;

use serde::{Deserialize, Serialize};

use crate::error::FlowError;
use crate::host::{Graphic, RenderEngine, RenderTarget, Surface};
use crate::theme::ThemeMode;
use crate::view::{DiagramSource, ViewStateController};

const TARGET_PREFIX: &str = "mermaid";

/// Engine options that do not depend on the theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub security_level: String,
    pub use_max_width: bool,
    pub html_labels: bool,
    pub curve: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self { security_level: "loose".to_owned(), use_max_width: true, html_labels: true, curve: "basis".to_owned() }
    }
}

/// Flowchart-specific engine options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowchartProfile {
    pub use_max_width: bool,
    pub html_labels: bool,
    pub curve: String,
}

/// Full engine configuration, serialized in the shape the engine's
/// `initialize` call expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProfile {
    pub start_on_load: bool,
    pub theme: String,
    pub security_level: String,
    pub flowchart: FlowchartProfile,
}

impl RenderProfile {
    #[must_use]
    pub fn for_theme(theme: ThemeMode, settings: &RenderSettings) -> Self {
        Self {
            start_on_load: false,
            theme: theme.engine_theme().to_owned(),
            security_level: settings.security_level.clone(),
            flowchart: FlowchartProfile {
                use_max_width: settings.use_max_width,
                html_labels: settings.html_labels,
                curve: settings.curve.clone(),
            },
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Wraps the render engine and hands out a fresh target id per call.
#[derive(Debug)]
pub struct DiagramRenderer {
    settings: RenderSettings,
    next_id: Cell<u64>,
}

impl DiagramRenderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self { settings, next_id: Cell::new(1) }
    }

    #[must_use]
    pub fn profile(&self, theme: ThemeMode) -> RenderProfile {
        RenderProfile::for_theme(theme, &self.settings)
    }

    /// Allocate an element id no earlier render has used.
    pub fn next_target(&self) -> RenderTarget {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        RenderTarget::new(format!("{TARGET_PREFIX}-{id}"))
    }

    /// Configure the engine for `theme` without rendering.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Render`] if the engine rejects the profile.
    pub fn configure<E: RenderEngine>(&self, engine: &E, theme: ThemeMode) -> Result<(), FlowError> {
        engine.initialize(&self.profile(theme)).map_err(|e| {
            tracing::warn!(error = %e, %theme, "render engine rejected profile");
            FlowError::Render { detail: e.to_string() }
        })
    }

    /// Re-configure for `theme` and render `source` into a new graphic.
    ///
    /// Nothing is mounted here; the caller decides whether the result is
    /// still wanted before calling [`DiagramRenderer::install`].
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::Render`] when the engine cannot parse or lay out
    /// the description.
    pub async fn render<E: RenderEngine>(
        &self,
        engine: &E,
        source: &DiagramSource,
        theme: ThemeMode,
    ) -> Result<Graphic, FlowError> {
        self.configure(engine, theme)?;
        let target = self.next_target();
        match engine.render(&target, source.as_str()).await {
            Ok(graphic) => {
                tracing::debug!(%target, bytes = graphic.svg.len(), "diagram rendered");
                Ok(graphic)
            }
            Err(e) => {
                tracing::warn!(error = %e, %target, "diagram render failed");
                Err(FlowError::Render { detail: e.to_string() })
            }
        }
    }

    /// Mount `graphic`, rendered in `theme`, in place of any previous one and
    /// re-apply the current zoom so it survives re-renders.
    pub fn install<S: Surface>(
        &self,
        surface: &S,
        view: &mut ViewStateController,
        graphic: &Graphic,
        theme: ThemeMode,
    ) {
        surface.mount(graphic);
        view.attach(surface, graphic.target.clone(), theme);
    }
}

impl Default for DiagramRenderer {
    fn default() -> Self {
        Self::new(RenderSettings::default())
    }
}
