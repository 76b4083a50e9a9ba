//! In-memory host for driving a `Studio` end to end.
//!
//! Service replies and renders can be scripted ahead of time or deferred
//! behind a oneshot channel, which lets tests interleave overlapping actions
//! deterministically on a single-threaded runtime.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};

use flownook::api::{ExamplesResponse, GenerateRequest, GenerateResponse, GenerationService, ServiceError};
use flownook::error::HostError;
use flownook::host::{
    BoxSize, FileSaver, Graphic, ImagePayload, PreferenceStore, RasterRequest, Rasterizer, RenderEngine, RenderTarget,
    Surface,
};
use flownook::render::RenderProfile;
use flownook::{Studio, StudioConfig, ThemeMode, ViewKind};
use futures::channel::oneshot;

pub type GenerateReply = Result<GenerateResponse, ServiceError>;

enum Reply {
    Ready(GenerateReply),
    Deferred(oneshot::Receiver<GenerateReply>),
}

pub struct FakeHost {
    // Service
    replies: RefCell<VecDeque<Reply>>,
    pub generate_requests: RefCell<Vec<String>>,
    pub examples_reply: RefCell<Result<ExamplesResponse, ServiceError>>,

    // Engine
    engine_theme: RefCell<String>,
    pub initialized_themes: RefCell<Vec<String>>,
    pub rejected_sources: RefCell<HashSet<String>>,
    render_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    pub rendered_targets: RefCell<Vec<String>>,

    // Surface
    pub views: RefCell<Vec<ViewKind>>,
    pub error_message: RefCell<Option<String>>,
    pub busy: Cell<bool>,
    pub controls_enabled: Cell<bool>,
    pub mounted: RefCell<Option<Graphic>>,
    pub scale: Cell<Option<f64>>,
    pub natural: Cell<BoxSize>,
    pub themes_applied: RefCell<Vec<ThemeMode>>,
    pub notices: RefCell<Vec<String>>,

    // Export
    pub raster_requests: RefCell<Vec<RasterRequest>>,
    pub raster_fails: Cell<bool>,
    raster_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    pub saved: RefCell<Vec<String>>,

    // Preferences
    pub prefs: RefCell<HashMap<String, String>>,
}

impl Default for FakeHost {
    fn default() -> Self {
        Self {
            replies: RefCell::new(VecDeque::new()),
            generate_requests: RefCell::new(Vec::new()),
            examples_reply: RefCell::new(Ok(ExamplesResponse::default())),
            engine_theme: RefCell::new(String::new()),
            initialized_themes: RefCell::new(Vec::new()),
            rejected_sources: RefCell::new(HashSet::new()),
            render_gates: RefCell::new(VecDeque::new()),
            rendered_targets: RefCell::new(Vec::new()),
            views: RefCell::new(Vec::new()),
            error_message: RefCell::new(None),
            busy: Cell::new(false),
            controls_enabled: Cell::new(false),
            mounted: RefCell::new(None),
            scale: Cell::new(None),
            natural: Cell::new(BoxSize::new(800.0, 600.0)),
            themes_applied: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
            raster_requests: RefCell::new(Vec::new()),
            raster_fails: Cell::new(false),
            raster_gates: RefCell::new(VecDeque::new()),
            saved: RefCell::new(Vec::new()),
            prefs: RefCell::new(HashMap::new()),
        }
    }
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stored_theme(theme: &str) -> Self {
        let host = Self::default();
        host.prefs.borrow_mut().insert("theme".into(), theme.into());
        host
    }

    pub fn reply(&self, reply: GenerateReply) {
        self.replies.borrow_mut().push_back(Reply::Ready(reply));
    }

    pub fn reply_ok(&self, code: &str) {
        self.reply(Ok(GenerateResponse::ok(code)));
    }

    /// Queue a reply that resolves when the returned sender fires.
    pub fn defer_reply(&self) -> oneshot::Sender<GenerateReply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Reply::Deferred(rx));
        tx
    }

    /// Hold the next render until the returned sender fires.
    pub fn defer_render(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.render_gates.borrow_mut().push_back(rx);
        tx
    }

    /// Hold the next rasterization until the returned sender fires.
    pub fn defer_raster(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.raster_gates.borrow_mut().push_back(rx);
        tx
    }

    pub fn reject_source(&self, source: &str) {
        self.rejected_sources.borrow_mut().insert(source.to_owned());
    }

    pub fn last_view(&self) -> Option<ViewKind> {
        self.views.borrow().last().copied()
    }

    pub fn mounted_svg(&self) -> Option<String> {
        self.mounted.borrow().as_ref().map(|g| g.svg.clone())
    }
}

pub fn studio() -> Studio<FakeHost> {
    studio_with(FakeHost::new())
}

pub fn studio_with(host: FakeHost) -> Studio<FakeHost> {
    Studio::new(host, StudioConfig::default()).expect("default config is valid")
}

impl GenerationService for FakeHost {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse, ServiceError> {
        self.generate_requests.borrow_mut().push(request.text.clone());
        let reply = self.replies.borrow_mut().pop_front();
        match reply {
            Some(Reply::Ready(reply)) => reply,
            Some(Reply::Deferred(rx)) => rx.await.unwrap_or_else(|_| Err(ServiceError::Transport("dropped".into()))),
            None => Err(ServiceError::Transport("no scripted reply".into())),
        }
    }

    async fn examples(&self) -> Result<ExamplesResponse, ServiceError> {
        self.examples_reply.borrow().clone()
    }
}

impl RenderEngine for FakeHost {
    fn initialize(&self, profile: &RenderProfile) -> Result<(), HostError> {
        self.initialized_themes.borrow_mut().push(profile.theme.clone());
        *self.engine_theme.borrow_mut() = profile.theme.clone();
        Ok(())
    }

    async fn render(&self, target: &RenderTarget, source: &str) -> Result<Graphic, HostError> {
        self.rendered_targets.borrow_mut().push(target.to_string());
        // Theme is fixed at call time, like the real engine.
        let theme = self.engine_theme.borrow().clone();
        let gate = self.render_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            gate.await.map_err(|_| HostError::new("render gate dropped"))?;
        }
        if self.rejected_sources.borrow().contains(source) {
            return Err(HostError::new("Parse error on line 1"));
        }
        Ok(Graphic { target: target.clone(), svg: format!("<svg data-theme=\"{theme}\">{source}</svg>") })
    }
}

impl Surface for FakeHost {
    fn show_view(&self, view: ViewKind) {
        self.views.borrow_mut().push(view);
    }

    fn set_error_message(&self, message: &str) {
        *self.error_message.borrow_mut() = Some(message.to_owned());
    }

    fn set_generate_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.controls_enabled.set(enabled);
    }

    fn mount(&self, graphic: &Graphic) {
        *self.mounted.borrow_mut() = Some(graphic.clone());
        self.scale.set(None);
    }

    fn unmount(&self) {
        *self.mounted.borrow_mut() = None;
        self.scale.set(None);
    }

    fn apply_scale(&self, factor: f64) {
        if self.mounted.borrow().is_some() {
            self.scale.set(Some(factor));
        }
    }

    fn mounted_box(&self) -> Option<BoxSize> {
        self.mounted.borrow().as_ref().map(|_| self.natural.get())
    }

    fn apply_theme(&self, theme: ThemeMode) {
        self.themes_applied.borrow_mut().push(theme);
    }

    fn show_notice(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_owned());
    }
}

impl Rasterizer for FakeHost {
    async fn rasterize(&self, request: &RasterRequest) -> Result<ImagePayload, HostError> {
        self.raster_requests.borrow_mut().push(request.clone());
        let gate = self.raster_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            gate.await.map_err(|_| HostError::new("raster gate dropped"))?;
        }
        if self.raster_fails.get() {
            return Err(HostError::new("SecurityError: The operation is insecure."));
        }
        Ok(ImagePayload { data_url: "data:image/png;base64,iVBORw0KGgo=".into() })
    }
}

impl FileSaver for FakeHost {
    fn save(&self, filename: &str, _payload: &ImagePayload) -> Result<(), HostError> {
        self.saved.borrow_mut().push(filename.to_owned());
        Ok(())
    }
}

impl PreferenceStore for FakeHost {
    fn load(&self, key: &str) -> Option<String> {
        self.prefs.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        self.prefs.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
