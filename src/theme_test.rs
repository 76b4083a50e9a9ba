use std::cell::RefCell;
use std::collections::HashMap;

use super::*;
use crate::error::HostError;

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_writes: bool,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> Result<(), HostError> {
        if self.fail_writes {
            return Err(HostError::new("quota exceeded"));
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================
// ThemeMode
// =============================================================

#[test]
fn default_mode_is_light() {
    assert_eq!(ThemeMode::default(), ThemeMode::Light);
}

#[test]
fn parse_recognizes_dark_only() {
    assert_eq!(ThemeMode::parse("dark"), ThemeMode::Dark);
    assert_eq!(ThemeMode::parse(" Dark "), ThemeMode::Dark);
    assert_eq!(ThemeMode::parse("light"), ThemeMode::Light);
    assert_eq!(ThemeMode::parse("solarized"), ThemeMode::Light);
    assert_eq!(ThemeMode::parse(""), ThemeMode::Light);
}

#[test]
fn toggled_flips() {
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
}

#[test]
fn engine_theme_names() {
    assert_eq!(ThemeMode::Light.engine_theme(), "default");
    assert_eq!(ThemeMode::Dark.engine_theme(), "dark");
}

#[test]
fn backgrounds_are_opaque_colors() {
    assert_eq!(ThemeMode::Light.background(), "#ffffff");
    assert_eq!(ThemeMode::Dark.background(), "#111827");
}

#[test]
fn logo_swaps_with_theme() {
    assert_eq!(ThemeMode::Light.logo_asset(), "flownook_logo.png");
    assert_eq!(ThemeMode::Dark.logo_asset(), "flownook_logo2.png");
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn load_missing_key_defaults_to_light() {
    let store = MemoryStore::default();
    let pref = ThemePreference::load(&store, "theme");
    assert_eq!(pref.mode(), ThemeMode::Light);
}

#[test]
fn load_reads_stored_dark() {
    let store = MemoryStore::default();
    store.values.borrow_mut().insert("theme".into(), "dark".into());
    let pref = ThemePreference::load(&store, "theme");
    assert_eq!(pref.mode(), ThemeMode::Dark);
}

#[test]
fn toggle_persists_new_value() {
    let store = MemoryStore::default();
    let mut pref = ThemePreference::load(&store, "theme");
    assert_eq!(pref.toggle(&store), ThemeMode::Dark);
    assert_eq!(store.load("theme").as_deref(), Some("dark"));
    assert_eq!(pref.toggle(&store), ThemeMode::Light);
    assert_eq!(store.load("theme").as_deref(), Some("light"));
}

#[test]
fn toggle_survives_write_failure() {
    let store = MemoryStore { fail_writes: true, ..Default::default() };
    let mut pref = ThemePreference::load(&store, "theme");
    assert_eq!(pref.toggle(&store), ThemeMode::Dark);
    assert_eq!(pref.mode(), ThemeMode::Dark);
    assert_eq!(store.load("theme"), None);
}
