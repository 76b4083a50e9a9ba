//! Local UI chrome state (views, busy flag, panels, notices).
//!
//! DESIGN
//! ======
//! Fields mirror what the studio pushes through its `Surface`. Panel
//! open/closed flags and the notice queue are purely presentational and are
//! owned here rather than by the studio.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use flownook::api::Example;
use flownook::view::{GENERATE_LABEL, GENERATING_LABEL};
use flownook::{ThemeMode, ViewKind};

/// Open/closed flags for the popovers and modal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PanelState {
    pub examples_open: bool,
    pub quality_menu_open: bool,
    pub help_open: bool,
}

impl PanelState {
    pub fn toggle_examples(&mut self) {
        self.examples_open = !self.examples_open;
        self.quality_menu_open = false;
    }

    pub fn toggle_quality_menu(&mut self) {
        self.quality_menu_open = !self.quality_menu_open;
        self.examples_open = false;
    }

    /// Close each popover that `site` lies outside of.
    pub fn close_outside(&mut self, site: ClickSite) {
        if !site.in_examples {
            self.examples_open = false;
        }
        if !site.in_quality_menu {
            self.quality_menu_open = false;
        }
    }
}

/// Where a page click landed, relative to each popover and its toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickSite {
    pub in_examples: bool,
    pub in_quality_menu: bool,
}

/// A transient message shown over the page. `seq` lets a dismiss timer
/// clear only the notice it was started for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: String,
}

/// UI state for the studio page.
#[derive(Clone, Debug)]
pub struct UiState {
    pub view: ViewKind,
    pub error_message: String,
    pub generating: bool,
    pub controls_enabled: bool,
    pub theme: ThemeMode,
    pub zoom_percent: u32,
    pub zoom_in_enabled: bool,
    pub zoom_out_enabled: bool,
    pub quality: u32,
    pub quality_label: String,
    pub examples: Vec<Example>,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
    pub input_focus_seq: u64,
    pub panels: PanelState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            view: ViewKind::Placeholder,
            error_message: String::new(),
            generating: false,
            controls_enabled: false,
            theme: ThemeMode::Light,
            zoom_percent: 100,
            zoom_in_enabled: false,
            zoom_out_enabled: false,
            quality: flownook::config::DEFAULT_QUALITY,
            quality_label: "2K".to_owned(),
            examples: Vec::new(),
            notice: None,
            notice_seq: 0,
            input_focus_seq: 0,
            panels: PanelState::default(),
        }
    }
}

impl UiState {
    /// Text for the generate button.
    pub fn generate_label(&self) -> &'static str {
        if self.generating { GENERATING_LABEL } else { GENERATE_LABEL }
    }

    /// Show `message` as the current notice and return its sequence number.
    pub fn push_notice(&mut self, message: &str) -> u64 {
        self.notice_seq += 1;
        self.notice = Some(Notice { seq: self.notice_seq, message: message.to_owned() });
        self.notice_seq
    }

    /// Clear the notice if it is still the one numbered `seq`.
    pub fn dismiss_notice(&mut self, seq: u64) {
        if self.notice.as_ref().is_some_and(|n| n.seq == seq) {
            self.notice = None;
        }
    }

    /// Ask the description input to take focus.
    pub fn request_input_focus(&mut self) {
        self.input_focus_seq += 1;
    }
}
