//! The studio controller: every user action enters here.
//!
//! ARCHITECTURE
//! ============
//! `Studio` owns one [`StudioState`] behind a `RefCell` and one host that
//! implements every collaborator trait. Methods take `&self` so the UI can
//! start a new action while an older one is still awaiting; request tokens
//! (see [`crate::session`]) decide which completion is allowed to touch the
//! screen. Borrows of the state never live across an `.await`.
//!
//! ERROR HANDLING
//! ==============
//! Errors are surfaced on the page before they are returned. Generation and
//! render failures replace the view with the error pane; export failures go
//! to the notice channel so a diagram on screen is never blanked. The
//! returned `Result` is for callers that want to react further (tests, logs).

use std::cell::RefCell;

use crate::api::Example;
use crate::catalog::ExampleCatalog;
use crate::config::StudioConfig;
use crate::error::{ConfigError, FlowError};
use crate::export::{DownloadQuality, ExportPipeline};
use crate::host::Host;
use crate::render::DiagramRenderer;
use crate::session::{GenerationSession, RequestTokens};
use crate::theme::{ThemeMode, ThemePreference};
use crate::view::{DiagramSource, ViewKind, ViewState, ViewStateController};

/// How an async action ended when it did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The result reached the screen (or the download started).
    Applied,
    /// A newer action started first; the result was dropped.
    Superseded,
}

/// Mutable studio state. Only [`Studio`] methods touch it.
#[derive(Debug)]
struct StudioState {
    view: ViewStateController,
    theme: ThemePreference,
    quality: DownloadQuality,
    catalog: ExampleCatalog,
}

/// Controller for one studio page.
pub struct Studio<H: Host> {
    host: H,
    config: StudioConfig,
    session: GenerationSession,
    renderer: DiagramRenderer,
    exporter: ExportPipeline,
    tokens: RequestTokens,
    state: RefCell<StudioState>,
}

impl<H: Host> Studio<H> {
    /// Load the theme preference, style the page, configure the engine, and
    /// show the placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` is inconsistent.
    pub fn new(host: H, config: StudioConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let theme = ThemePreference::load(&host, &config.theme_storage_key);
        let renderer = DiagramRenderer::new(config.render.clone());
        host.apply_theme(theme.mode());
        if let Err(e) = renderer.configure(&host, theme.mode()) {
            tracing::warn!(error = %e, "initial engine configuration failed; will retry on render");
        }

        let mut view = ViewStateController::new(config.zoom);
        view.reset(&host);

        let state = StudioState {
            view,
            theme,
            quality: DownloadQuality::new(config.default_quality),
            catalog: ExampleCatalog::default(),
        };
        Ok(Self {
            exporter: ExportPipeline::new(config.filename_prefix.clone()),
            host,
            config,
            session: GenerationSession::new(),
            renderer,
            tokens: RequestTokens::new(),
            state: RefCell::new(state),
        })
    }

    // --- Queries ---

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.state.borrow().view.state().clone()
    }

    #[must_use]
    pub fn view_kind(&self) -> ViewKind {
        self.state.borrow().view.kind()
    }

    #[must_use]
    pub fn diagram_source(&self) -> Option<DiagramSource> {
        self.state.borrow().view.source().cloned()
    }

    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        self.state.borrow().view.controls_enabled()
    }

    #[must_use]
    pub fn has_graphic(&self) -> bool {
        self.state.borrow().view.has_graphic()
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.state.borrow().view.zoom().factor()
    }

    #[must_use]
    pub fn zoom_percent(&self) -> u32 {
        self.state.borrow().view.zoom().percent()
    }

    /// Whether zooming in would change anything right now.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        let state = self.state.borrow();
        state.view.has_graphic() && !state.view.zoom().at_max()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        let state = self.state.borrow();
        state.view.has_graphic() && !state.view.zoom().at_min()
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.state.borrow().theme.mode()
    }

    #[must_use]
    pub fn download_quality(&self) -> DownloadQuality {
        self.state.borrow().quality
    }

    #[must_use]
    pub fn quality_options(&self) -> Vec<DownloadQuality> {
        self.config.qualities()
    }

    #[must_use]
    pub fn examples(&self) -> Vec<Example> {
        self.state.borrow().catalog.examples().to_vec()
    }

    /// Description text for the example at `index`.
    #[must_use]
    pub fn example_description(&self, index: usize) -> Option<String> {
        self.state.borrow().catalog.select(index).map(str::to_owned)
    }

    // --- Generation ---

    /// Turn `text` into a diagram on screen.
    ///
    /// Blank input goes straight to the error view. Otherwise the view shows
    /// loading, one request is made, and the reply is rendered; the view only
    /// changes again once rendering has resolved.
    ///
    /// # Errors
    ///
    /// Returns the [`FlowError`] that was shown in the error view.
    pub async fn generate(&self, text: &str) -> Result<Completion, FlowError> {
        let text = match GenerationSession::validate(text) {
            Ok(text) => text,
            Err(e) => {
                self.tokens.invalidate();
                self.surface(&e);
                return Err(e);
            }
        };

        let token = self.tokens.issue();
        self.state.borrow_mut().view.show(&self.host, ViewState::Loading);
        tracing::info!(token = token.value(), chars = text.len(), "generation started");

        let outcome = self.session.request(&self.host, text).await;
        if !self.tokens.is_current(token) {
            tracing::debug!(token = token.value(), "dropping superseded generation response");
            return Ok(Completion::Superseded);
        }
        let source = match outcome {
            Ok(source) => source,
            Err(e) => {
                self.surface(&e);
                return Err(e);
            }
        };

        // Re-render if the theme flips while the engine is working, so the
        // mounted graphic always matches the active theme.
        let (graphic, theme) = loop {
            let theme = self.theme();
            let rendered = self.renderer.render(&self.host, &source, theme).await;
            if !self.tokens.is_current(token) {
                tracing::debug!(token = token.value(), "dropping superseded render");
                return Ok(Completion::Superseded);
            }
            match rendered {
                Ok(graphic) if self.theme() == theme => break (graphic, theme),
                Ok(_) => tracing::debug!(token = token.value(), "theme changed during render; rendering again"),
                Err(e) => {
                    self.surface(&e);
                    return Err(e);
                }
            }
        };

        let mut state = self.state.borrow_mut();
        self.renderer.install(&self.host, &mut state.view, &graphic, theme);
        state.view.show(&self.host, ViewState::Diagram(source));
        tracing::info!(token = token.value(), target = %graphic.target, "flowchart displayed");
        Ok(Completion::Applied)
    }

    /// Clear back to the placeholder, dropping any in-flight result.
    pub fn reset(&self) {
        self.tokens.invalidate();
        self.state.borrow_mut().view.reset(&self.host);
    }

    // --- Zoom ---

    pub fn zoom_in(&self) -> f64 {
        self.state.borrow_mut().view.zoom_in(&self.host)
    }

    pub fn zoom_out(&self) -> f64 {
        self.state.borrow_mut().view.zoom_out(&self.host)
    }

    // --- Theme ---

    /// Flip and persist the theme, restyle the page, and re-render the
    /// current diagram (keeping its zoom) if one is showing.
    pub async fn toggle_theme(&self) -> ThemeMode {
        let (mode, source) = {
            let mut state = self.state.borrow_mut();
            let mode = state.theme.toggle(&self.host);
            (mode, state.view.source().cloned())
        };
        self.host.apply_theme(mode);
        tracing::info!(theme = %mode, "theme toggled");

        let Some(source) = source else {
            if let Err(e) = self.renderer.configure(&self.host, mode) {
                tracing::warn!(error = %e, "engine reconfiguration failed");
            }
            return mode;
        };

        let token = self.tokens.issue();
        let rendered = self.renderer.render(&self.host, &source, mode).await;
        if !self.tokens.is_current(token) {
            tracing::debug!(token = token.value(), "dropping superseded theme re-render");
            return mode;
        }
        match rendered {
            Ok(graphic) => {
                let mut state = self.state.borrow_mut();
                self.renderer.install(&self.host, &mut state.view, &graphic, mode);
                state.view.show(&self.host, ViewState::Diagram(source));
            }
            Err(e) => self.surface(&e),
        }
        mode
    }

    // --- Export ---

    /// Choose the export width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownQuality`] for a value not on offer; the
    /// selection is left unchanged.
    pub fn set_download_quality(&self, pixels: u32) -> Result<DownloadQuality, ConfigError> {
        let quality = self.config.quality(pixels)?;
        self.state.borrow_mut().quality = quality;
        tracing::debug!(quality = quality.pixels(), "download quality selected");
        Ok(quality)
    }

    /// Rasterize the mounted graphic at the selected quality and save it.
    ///
    /// The background follows the theme the mounted graphic was drawn in,
    /// which lags the active theme while a theme re-render is pending. Does
    /// not change the view, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::NoContent`] when nothing is mounted or
    /// [`FlowError::Export`] when rasterizing or saving fails; both are also
    /// shown as a notice.
    pub async fn export(&self) -> Result<Completion, FlowError> {
        let token = self.tokens.latest();
        let planned = {
            let state = self.state.borrow();
            self.exporter.prepare(&self.host, state.view.graphic_theme(), state.quality)
        };
        let plan = match planned {
            Ok(plan) => plan,
            Err(e) => {
                self.surface(&e);
                return Err(e);
            }
        };
        tracing::info!(quality = plan.quality.pixels(), scale = plan.scale, "export started");

        let rasterized = self.exporter.rasterize(&self.host, &plan).await;
        if !self.tokens.is_current(token) {
            tracing::debug!(token = token.value(), "dropping export of a replaced graphic");
            return Ok(Completion::Superseded);
        }
        let result = rasterized.and_then(|payload| self.exporter.deliver(&self.host, &plan, &payload));
        match result {
            Ok(()) => Ok(Completion::Applied),
            Err(e) => {
                self.surface(&e);
                Err(e)
            }
        }
    }

    // --- Examples ---

    /// Fetch the examples list, falling back to built-ins when unreachable.
    pub async fn load_examples(&self) -> Vec<Example> {
        let catalog = ExampleCatalog::load(&self.host).await;
        let examples = catalog.examples().to_vec();
        self.state.borrow_mut().catalog = catalog;
        examples
    }

    // --- Internals ---

    /// Put `error` on the page: as a notice when the view must survive it,
    /// otherwise in the error pane.
    fn surface(&self, error: &FlowError) {
        if error.preserves_view() {
            tracing::warn!(error = ?error, "action failed; keeping view");
            self.host.show_notice(&error.to_string());
        } else {
            self.state.borrow_mut().view.show(&self.host, ViewState::Error(error.to_string()));
        }
    }
}
