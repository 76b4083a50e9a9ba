//! Light/dark preference, loaded once and persisted on every toggle.
//!
//! DESIGN
//! ======
//! The in-memory [`ThemeMode`] is the only source of truth after startup.
//! Persistence is a side effect of [`ThemePreference::toggle`]; nothing reads
//! the store again, so the stored value and the live one cannot disagree.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::host::PreferenceStore;

const LIGHT_LOGO: &str = "flownook_logo.png";
const DARK_LOGO: &str = "flownook_logo2.png";

/// Active color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Parse a stored value. Anything other than `"dark"` is light.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("dark") { Self::Dark } else { Self::Light }
    }

    /// Value written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Built-in theme name understood by the render engine.
    #[must_use]
    pub fn engine_theme(self) -> &'static str {
        match self {
            Self::Light => "default",
            Self::Dark => "dark",
        }
    }

    /// Opaque page background, used behind exported images.
    #[must_use]
    pub fn background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#111827",
        }
    }

    #[must_use]
    pub fn logo_asset(self) -> &'static str {
        match self {
            Self::Light => LIGHT_LOGO,
            Self::Dark => DARK_LOGO,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide theme flag bound to its storage key.
#[derive(Debug, Clone)]
pub struct ThemePreference {
    mode: ThemeMode,
    key: String,
}

impl ThemePreference {
    /// Read the stored preference. Missing or unknown values load as light.
    pub fn load<P: PreferenceStore>(store: &P, key: &str) -> Self {
        let mode = store.load(key).map_or(ThemeMode::Light, |raw| ThemeMode::parse(&raw));
        tracing::debug!(theme = %mode, key, "theme preference loaded");
        Self { mode, key: key.to_owned() }
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it.
    ///
    /// A failed write is logged; the in-memory mode still flips so the page
    /// stays consistent for this session.
    pub fn toggle<P: PreferenceStore>(&mut self, store: &P) -> ThemeMode {
        self.mode = self.mode.toggled();
        if let Err(e) = store.store(&self.key, self.mode.as_str()) {
            tracing::warn!(error = %e, key = %self.key, "failed to persist theme preference");
        }
        self.mode
    }
}
