//! Top bar: logo, help button, and theme toggle.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Studio header.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let logo = move || dark_mode::logo_src(ui.get().theme);
    let glyph = move || dark_mode::toggle_glyph(ui.get().theme);

    view! {
        <header class="header">
            <img id="logoImg" class="header__logo" src=logo alt="Flownook"/>
            <span class="header__title">"Flowchart Studio"</span>
            <span class="header__spacer"></span>
            <button
                class="btn header__help"
                on:click=move |_| ui.update(|u| u.panels.help_open = true)
                title="Keyboard shortcuts"
            >
                "?"
            </button>
            <button
                class="btn header__theme-toggle"
                on:click=move |_| crate::host::runtime::toggle_theme()
                title="Toggle dark mode"
            >
                {glyph}
            </button>
        </header>
    }
}
