//! Keyboard shortcuts.
//!
//! Only primary-modifier chords are bound: Ctrl on Linux/Windows, Cmd (Meta)
//! on macOS. Either modifier is accepted on every platform.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    #[must_use]
    pub fn primary(self) -> bool {
        self.ctrl || self.meta
    }
}

/// What a bound chord does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutAction {
    Generate,
    FocusInput,
}

/// Key legend shown in the help panel.
pub const SHORTCUT_LEGEND: &[(&str, &str)] = &[
    ("Generate flowchart", "Ctrl/Cmd + Enter"),
    ("Focus description", "Ctrl/Cmd + K"),
];

/// Map a `KeyboardEvent.key` value plus modifiers to an action.
#[must_use]
pub fn shortcut_for(key: &str, modifiers: Modifiers) -> Option<ShortcutAction> {
    if !modifiers.primary() {
        return None;
    }
    match key {
        "Enter" => Some(ShortcutAction::Generate),
        "k" | "K" => Some(ShortcutAction::FocusInput),
        _ => None,
    }
}
