//! Modal listing keyboard shortcuts.

use flownook::shortcuts::SHORTCUT_LEGEND;
use leptos::prelude::*;

/// Rows beyond the bound chords: keys handled by the page itself.
const EXTRA_ROWS: &[(&str, &str)] = &[("Close this help", "Esc")];

/// Fullscreen modal with shortcut table.
#[component]
pub fn HelpShortcutsModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());

    view! {
        <div class="help-shortcuts-modal__backdrop" on:click=on_backdrop>
            <div class="help-shortcuts-modal" on:click=move |ev| ev.stop_propagation() tabindex="0">
                <div class="help-shortcuts-modal__header">
                    <h2>"Help"</h2>
                    <button class="help-shortcuts-modal__close" on:click=on_close_click title="Close help">
                        "✕"
                    </button>
                </div>
                <div class="help-shortcuts-modal__subtitle">
                    "Describe a process in plain words, then generate. Zoom and download once a flowchart is shown."
                </div>
                <table class="help-shortcuts-modal__table">
                    <thead>
                        <tr>
                            <th>"Action"</th>
                            <th>"Shortcut"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SHORTCUT_LEGEND
                            .iter()
                            .chain(EXTRA_ROWS)
                            .map(|(action, keys)| {
                                view! {
                                    <tr>
                                        <td>{*action}</td>
                                        <td class="help-shortcuts-modal__keys">{*keys}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
