//! Theme chrome on the `<html>` element.
//!
//! The preference itself is owned by `flownook::theme::ThemePreference`;
//! this module only paints it: a `dark` class plus a `data-theme`
//! attribute on the document root. SSR paths no-op.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use flownook::ThemeMode;

#[cfg(feature = "hydrate")]
const DARK_CLASS: &str = "dark";

/// Path of the header logo for `theme`.
pub fn logo_src(theme: ThemeMode) -> String {
    format!("/{}", theme.logo_asset())
}

/// Glyph for the toggle button: the theme a click switches to.
pub fn toggle_glyph(theme: ThemeMode) -> &'static str {
    if theme.is_dark() { "☀" } else { "☾" }
}

/// Apply `theme` to the document root.
pub fn apply(theme: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        let classes = root.class_list();
        let toggled = if theme.is_dark() { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
        if let Err(e) = toggled {
            leptos::logging::warn!("failed to set theme class: {e:?}");
        }
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            leptos::logging::warn!("failed to set data-theme: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
