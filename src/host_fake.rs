//! Recording [`Surface`] for unit tests.

use std::cell::RefCell;

use super::{BoxSize, Graphic, Surface};
use crate::theme::ThemeMode;
use crate::view::ViewKind;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SurfaceCall {
    ShowView(ViewKind),
    ErrorMessage(String),
    GenerateBusy(bool),
    ControlsEnabled(bool),
    Mount(String),
    Unmount,
    Scale(f64),
    Theme(ThemeMode),
    Notice(String),
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub calls: RefCell<Vec<SurfaceCall>>,
    pub mounted: RefCell<Option<Graphic>>,
    pub natural: RefCell<Option<BoxSize>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_calls(&self) -> Vec<SurfaceCall> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn scales(&self) -> Vec<f64> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                SurfaceCall::Scale(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: SurfaceCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Surface for RecordingSurface {
    fn show_view(&self, view: ViewKind) {
        self.record(SurfaceCall::ShowView(view));
    }

    fn set_error_message(&self, message: &str) {
        self.record(SurfaceCall::ErrorMessage(message.to_owned()));
    }

    fn set_generate_busy(&self, busy: bool) {
        self.record(SurfaceCall::GenerateBusy(busy));
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.record(SurfaceCall::ControlsEnabled(enabled));
    }

    fn mount(&self, graphic: &Graphic) {
        self.record(SurfaceCall::Mount(graphic.target.to_string()));
        *self.mounted.borrow_mut() = Some(graphic.clone());
    }

    fn unmount(&self) {
        self.record(SurfaceCall::Unmount);
        *self.mounted.borrow_mut() = None;
    }

    fn apply_scale(&self, factor: f64) {
        self.record(SurfaceCall::Scale(factor));
    }

    fn mounted_box(&self) -> Option<BoxSize> {
        self.mounted.borrow().as_ref().and(*self.natural.borrow())
    }

    fn apply_theme(&self, theme: ThemeMode) {
        self.record(SurfaceCall::Theme(theme));
    }

    fn show_notice(&self, message: &str) {
        self.record(SurfaceCall::Notice(message.to_owned()));
    }
}
