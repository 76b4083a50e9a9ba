use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_shows_placeholder() {
    let state = UiState::default();
    assert_eq!(state.view, ViewKind::Placeholder);
    assert!(!state.controls_enabled);
    assert!(!state.generating);
}

#[test]
fn ui_state_default_quality_is_2k() {
    let state = UiState::default();
    assert_eq!(state.quality, 2000);
    assert_eq!(state.quality_label, "2K");
}

#[test]
fn ui_state_default_panels_closed() {
    assert_eq!(UiState::default().panels, PanelState::default());
}

// =============================================================
// Generate label
// =============================================================

#[test]
fn generate_label_tracks_busy_flag() {
    let mut state = UiState::default();
    assert_eq!(state.generate_label(), "Generate Flowchart");
    state.generating = true;
    assert_eq!(state.generate_label(), "Generating...");
}

// =============================================================
// Panels
// =============================================================

#[test]
fn opening_one_menu_closes_the_other() {
    let mut panels = PanelState::default();
    panels.toggle_examples();
    assert!(panels.examples_open);
    panels.toggle_quality_menu();
    assert!(panels.quality_menu_open);
    assert!(!panels.examples_open);
}

#[test]
fn click_elsewhere_closes_menus_but_not_help() {
    let mut panels = PanelState { examples_open: true, quality_menu_open: true, help_open: true };
    panels.close_outside(ClickSite::default());
    assert!(!panels.examples_open);
    assert!(!panels.quality_menu_open);
    assert!(panels.help_open);
}

#[test]
fn click_inside_quality_menu_keeps_it_open() {
    let mut panels = PanelState { examples_open: true, quality_menu_open: true, help_open: false };
    panels.close_outside(ClickSite { in_examples: false, in_quality_menu: true });
    assert!(panels.quality_menu_open);
    assert!(!panels.examples_open);
}

#[test]
fn click_inside_examples_keeps_them_open() {
    let mut panels = PanelState { examples_open: true, ..PanelState::default() };
    panels.close_outside(ClickSite { in_examples: true, in_quality_menu: false });
    assert!(panels.examples_open);
}

#[test]
fn zoom_buttons_start_disabled() {
    let state = UiState::default();
    assert!(!state.zoom_in_enabled);
    assert!(!state.zoom_out_enabled);
}

// =============================================================
// Notices
// =============================================================

#[test]
fn dismiss_clears_matching_notice() {
    let mut state = UiState::default();
    let seq = state.push_notice("No flowchart to download");
    state.dismiss_notice(seq);
    assert_eq!(state.notice, None);
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = UiState::default();
    let first = state.push_notice("Download failed. Please try again.");
    let second = state.push_notice("No flowchart to download");
    state.dismiss_notice(first);
    assert_eq!(state.notice.as_ref().map(|n| n.seq), Some(second));
}

#[test]
fn focus_requests_bump_sequence() {
    let mut state = UiState::default();
    state.request_input_focus();
    state.request_input_focus();
    assert_eq!(state.input_focus_seq, 2);
}
