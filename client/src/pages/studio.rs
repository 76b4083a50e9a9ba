//! The studio page: input on the left, diagram on the right.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the description text, the page-wide keyboard shortcuts, and closing
//! popovers on a click elsewhere. Key
//! chords are resolved by `flownook::shortcuts::shortcut_for` so the
//! bindings listed in the help modal and the ones handled here agree.

#[cfg(test)]
#[path = "studio_test.rs"]
mod studio_test;

#[cfg(any(test, feature = "hydrate"))]
use flownook::shortcuts::{Modifiers, ShortcutAction, shortcut_for};
use leptos::prelude::*;

use crate::components::diagram_panel::DiagramPanel;
use crate::components::header::Header;
use crate::components::help_shortcuts_modal::HelpShortcutsModal;
use crate::components::input_panel::InputPanel;
use crate::components::notice_toast::NoticeToast;
#[cfg(feature = "hydrate")]
use crate::state::ui::ClickSite;
use crate::state::ui::UiState;

/// Elements a click may land in without closing the examples list.
#[cfg(feature = "hydrate")]
const EXAMPLES_AREA: &str = ".input-panel__examples, .input-panel__examples-toggle";
/// Elements a click may land in without closing the quality menu.
#[cfg(feature = "hydrate")]
const QUALITY_AREA: &str = ".diagram-panel__download";

/// What a page-level key press should do.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyIntent {
    Shortcut(ShortcutAction),
    CloseHelp,
}

#[cfg(any(test, feature = "hydrate"))]
fn key_intent(key: &str, modifiers: Modifiers, help_open: bool) -> Option<KeyIntent> {
    if key == "Escape" && help_open {
        return Some(KeyIntent::CloseHelp);
    }
    shortcut_for(key, modifiers).map(KeyIntent::Shortcut)
}

/// Studio page.
#[component]
pub fn StudioPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let text = RwSignal::new(String::new());

    let submit = move || crate::host::runtime::generate(text.get_untracked());
    let on_generate = Callback::new(move |()| submit());
    let on_help_close = Callback::new(move |()| ui.update(|u| u.panels.help_open = false));

    #[cfg(feature = "hydrate")]
    {
        let listener = window_event_listener(leptos::ev::keydown, move |ev| {
            let modifiers =
                Modifiers { ctrl: ev.ctrl_key(), meta: ev.meta_key(), shift: ev.shift_key(), alt: ev.alt_key() };
            let help_open = ui.get_untracked().panels.help_open;
            let Some(intent) = key_intent(&ev.key(), modifiers, help_open) else {
                return;
            };
            ev.prevent_default();
            match intent {
                KeyIntent::Shortcut(ShortcutAction::Generate) => submit(),
                KeyIntent::Shortcut(ShortcutAction::FocusInput) => ui.update(UiState::request_input_focus),
                KeyIntent::CloseHelp => ui.update(|u| u.panels.help_open = false),
            }
        });
        let clicks = window_event_listener(leptos::ev::click, move |ev| {
            use wasm_bindgen::JsCast;

            let Some(target) = ev.target() else {
                return;
            };
            let Some(element) = target.dyn_ref::<web_sys::Element>() else {
                return;
            };
            let inside = |selector: &str| matches!(element.closest(selector), Ok(Some(_)));
            let site = ClickSite { in_examples: inside(EXAMPLES_AREA), in_quality_menu: inside(QUALITY_AREA) };
            let panels = ui.get_untracked().panels;
            if (panels.examples_open && !site.in_examples) || (panels.quality_menu_open && !site.in_quality_menu) {
                ui.update(|u| u.panels.close_outside(site));
            }
        });
        on_cleanup(move || {
            listener.remove();
            clicks.remove();
        });
    }

    view! {
        <div class="studio">
            <Header/>
            <main class="studio__body">
                <InputPanel text=text on_generate=on_generate/>
                <DiagramPanel/>
            </main>
            <NoticeToast/>
            <Show when=move || ui.get().panels.help_open>
                <HelpShortcutsModal on_close=on_help_close/>
            </Show>
        </div>
    }
}
