//! Browser implementation of the studio's collaborator traits.
//!
//! ARCHITECTURE
//! ============
//! [`BrowserHost`] is the single host a `flownook::Studio` runs against in
//! the page. View-pane switches, busy and control flags, theme and notices
//! are written into the shared [`UiState`] signal and rendered by
//! components. The diagram itself bypasses Leptos: `mermaid` produces SVG
//! markup that is injected into a fixed container node ([`chart`]), since
//! both zoom and rasterization operate on that node directly.
//!
//! Each JS collaborator lives in its own module (`mermaid`, `dom_to_image`,
//! `storage`); on SSR builds they compile to inert fallbacks.

pub mod chart;
pub mod dom_to_image;
pub mod mermaid;
pub mod runtime;
pub mod storage;

#[cfg(feature = "hydrate")]
mod js;

use flownook::api::{ExamplesResponse, GenerateRequest, GenerateResponse, GenerationService, ServiceError};
use flownook::error::HostError;
use flownook::host::{
    BoxSize, FileSaver, Graphic, ImagePayload, PreferenceStore, RasterRequest, Rasterizer, RenderEngine, RenderTarget,
    Surface,
};
use flownook::render::RenderProfile;
use flownook::{ThemeMode, ViewKind};
use leptos::prelude::*;

use crate::net::api::HttpService;
use crate::state::ui::UiState;

/// How long a notice stays up before it clears itself.
pub const NOTICE_DURATION_MS: u64 = 4000;

/// The page as seen by the studio.
pub struct BrowserHost {
    service: HttpService,
    ui: RwSignal<UiState>,
}

impl BrowserHost {
    pub fn new(service: HttpService, ui: RwSignal<UiState>) -> Self {
        Self { service, ui }
    }

    pub fn ui(&self) -> RwSignal<UiState> {
        self.ui
    }
}

impl GenerationService for BrowserHost {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ServiceError> {
        self.service.generate(request).await
    }

    async fn examples(&self) -> Result<ExamplesResponse, ServiceError> {
        self.service.examples().await
    }
}

impl RenderEngine for BrowserHost {
    fn initialize(&self, profile: &RenderProfile) -> Result<(), HostError> {
        mermaid::initialize(profile)
    }

    async fn render(&self, target: &RenderTarget, source: &str) -> Result<Graphic, HostError> {
        let svg = mermaid::render(target, source).await?;
        Ok(Graphic { target: target.clone(), svg })
    }
}

impl Surface for BrowserHost {
    fn show_view(&self, view: ViewKind) {
        self.ui.update(|u| u.view = view);
    }

    fn set_error_message(&self, message: &str) {
        self.ui.update(|u| u.error_message = message.to_owned());
    }

    fn set_generate_busy(&self, busy: bool) {
        self.ui.update(|u| u.generating = busy);
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.ui.update(|u| {
            u.controls_enabled = enabled;
            if !enabled {
                u.panels.quality_menu_open = false;
            }
        });
    }

    fn mount(&self, graphic: &Graphic) {
        chart::mount(&graphic.svg);
    }

    fn unmount(&self) {
        chart::clear();
    }

    fn apply_scale(&self, factor: f64) {
        chart::apply_scale(factor);
    }

    fn mounted_box(&self) -> Option<BoxSize> {
        chart::mounted_box()
    }

    fn apply_theme(&self, theme: ThemeMode) {
        crate::util::dark_mode::apply(theme);
        self.ui.update(|u| u.theme = theme);
    }

    fn show_notice(&self, message: &str) {
        let mut seq = 0;
        self.ui.update(|u| seq = u.push_notice(message));
        #[cfg(feature = "hydrate")]
        {
            let ui = self.ui;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(NOTICE_DURATION_MS)).await;
                ui.update(|u| u.dismiss_notice(seq));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = seq;
        }
    }
}

impl Rasterizer for BrowserHost {
    async fn rasterize(&self, request: &RasterRequest) -> Result<ImagePayload, HostError> {
        dom_to_image::rasterize(request).await
    }
}

impl FileSaver for BrowserHost {
    fn save(&self, filename: &str, payload: &ImagePayload) -> Result<(), HostError> {
        dom_to_image::save(filename, payload)
    }
}

impl PreferenceStore for BrowserHost {
    fn load(&self, key: &str) -> Option<String> {
        storage::load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        storage::store(key, value)
    }
}
