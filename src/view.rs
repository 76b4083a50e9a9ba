//! View-state machine: which of placeholder / loading / diagram / error is
//! on screen, and whether the diagram controls are usable.
//!
//! DESIGN
//! ======
//! [`ViewStateController`] is the single owned state object for the display
//! area. It holds the active [`ViewState`] (and through it the current
//! diagram source), the zoom controller, and the id and theme of the
//! mounted graphic.
//! All transitions go through [`ViewStateController::show`], which is the
//! only place that enforces "one pane visible, controls enabled iff diagram,
//! no graphic left mounted outside the diagram view".

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::host::{RenderTarget, Surface};
use crate::theme::ThemeMode;
use crate::zoom::{ZoomController, ZoomLimits};

/// Label on the generate action while idle.
pub const GENERATE_LABEL: &str = "Generate Flowchart";
/// Label on the generate action while a request is in flight.
pub const GENERATING_LABEL: &str = "Generating...";

/// Diagram description returned by the generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramSource(String);

impl DiagramSource {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// What the display area shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Placeholder,
    Loading,
    Diagram(DiagramSource),
    Error(String),
}

impl ViewState {
    #[must_use]
    pub fn kind(&self) -> ViewKind {
        match self {
            Self::Placeholder => ViewKind::Placeholder,
            Self::Loading => ViewKind::Loading,
            Self::Diagram(_) => ViewKind::Diagram,
            Self::Error(_) => ViewKind::Error,
        }
    }

    /// Source of the diagram view, if that is the active one.
    #[must_use]
    pub fn source(&self) -> Option<&DiagramSource> {
        match self {
            Self::Diagram(source) => Some(source),
            _ => None,
        }
    }
}

/// Payload-free discriminant of [`ViewState`], one per view pane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewKind {
    #[default]
    Placeholder,
    Loading,
    Diagram,
    Error,
}

impl ViewKind {
    #[must_use]
    pub fn controls_enabled(self) -> bool {
        self == Self::Diagram
    }

    #[must_use]
    pub fn generate_label(self) -> &'static str {
        if self == Self::Loading { GENERATING_LABEL } else { GENERATE_LABEL }
    }
}

/// The graphic occupying the display area and the theme it was drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedGraphic {
    pub target: RenderTarget,
    pub theme: ThemeMode,
}

/// Owner of the display-area state.
#[derive(Debug, Clone, Default)]
pub struct ViewStateController {
    state: ViewState,
    zoom: ZoomController,
    mounted: Option<MountedGraphic>,
}

impl ViewStateController {
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self { state: ViewState::Placeholder, zoom: ZoomController::new(limits), mounted: None }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn kind(&self) -> ViewKind {
        self.state.kind()
    }

    #[must_use]
    pub fn source(&self) -> Option<&DiagramSource> {
        self.state.source()
    }

    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.kind().controls_enabled()
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    #[must_use]
    pub fn mounted(&self) -> Option<&MountedGraphic> {
        self.mounted.as_ref()
    }

    /// Whether a graphic is mounted and the diagram view is showing it.
    #[must_use]
    pub fn has_graphic(&self) -> bool {
        self.mounted.is_some() && self.kind() == ViewKind::Diagram
    }

    /// Theme of the graphic on screen, while the diagram view shows one.
    #[must_use]
    pub fn graphic_theme(&self) -> Option<ThemeMode> {
        if self.kind() != ViewKind::Diagram {
            return None;
        }
        self.mounted.as_ref().map(|m| m.theme)
    }

    /// Transition to `state`.
    ///
    /// Leaving the diagram view unmounts the graphic; the diagram source is
    /// dropped along with the old state.
    pub fn show<S: Surface>(&mut self, surface: &S, state: ViewState) {
        let kind = state.kind();
        if kind != ViewKind::Diagram && self.mounted.take().is_some() {
            surface.unmount();
        }
        surface.show_view(kind);
        if let ViewState::Error(message) = &state {
            surface.set_error_message(message);
        }
        surface.set_generate_busy(kind == ViewKind::Loading);
        surface.set_controls_enabled(kind.controls_enabled());
        tracing::debug!(from = ?self.state.kind(), to = ?kind, "view transition");
        self.state = state;
    }

    /// Back to the placeholder with zoom at its initial value.
    pub fn reset<S: Surface>(&mut self, surface: &S) {
        self.show(surface, ViewState::Placeholder);
        self.zoom.reset();
    }

    /// Record that `target`, drawn in `theme`, now occupies the display area
    /// and re-apply zoom to it.
    pub fn attach<S: Surface>(&mut self, surface: &S, target: RenderTarget, theme: ThemeMode) {
        self.mounted = Some(MountedGraphic { target, theme });
        self.zoom.apply(surface, true);
    }

    pub fn zoom_in<S: Surface>(&mut self, surface: &S) -> f64 {
        let mounted = self.has_graphic();
        self.zoom.zoom_in(surface, mounted)
    }

    pub fn zoom_out<S: Surface>(&mut self, surface: &S) -> f64 {
        let mounted = self.has_graphic();
        self.zoom.zoom_out(surface, mounted)
    }
}
