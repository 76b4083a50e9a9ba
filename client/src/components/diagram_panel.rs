//! Display area: the four view panes plus zoom and download controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one pane is visible, chosen by `UiState::view`. The diagram
//! container is never unmounted by Leptos; the studio's host writes SVG into
//! it directly, so it is only hidden when another pane is active.

use flownook::ViewKind;
use leptos::prelude::*;

use crate::host::chart::CHART_ELEMENT_ID;
use crate::host::runtime;
use crate::state::ui::UiState;

fn pane_class(base: &'static str, visible: bool) -> String {
    if visible { base.to_owned() } else { format!("{base} hidden") }
}

/// Right-hand diagram panel.
#[component]
pub fn DiagramPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let showing = move |kind: ViewKind| ui.get().view == kind;
    let disabled = move || !ui.get().controls_enabled;
    let zoom_in_disabled = move || !ui.get().zoom_in_enabled;
    let zoom_out_disabled = move || !ui.get().zoom_out_enabled;

    view! {
        <section class="diagram-panel">
            <div class="diagram-panel__toolbar">
                <button id="zoomOutBtn" class="btn" disabled=zoom_out_disabled on:click=move |_| runtime::zoom_out() title="Zoom out">
                    "−"
                </button>
                <span class="diagram-panel__zoom">{move || format!("{}%", ui.get().zoom_percent)}</span>
                <button id="zoomInBtn" class="btn" disabled=zoom_in_disabled on:click=move |_| runtime::zoom_in() title="Zoom in">
                    "+"
                </button>
                <span class="diagram-panel__spacer"></span>
                <div class="diagram-panel__download">
                    <button id="downloadBtn" class="btn btn--primary" disabled=disabled on:click=move |_| runtime::download()>
                        "Download PNG"
                    </button>
                    <button
                        id="downloadQualityBtn"
                        class="btn"
                        disabled=disabled
                        on:click=move |_| ui.update(|u| u.panels.toggle_quality_menu())
                    >
                        {move || ui.get().quality_label}
                        " ▾"
                    </button>
                    <Show when=move || ui.get().panels.quality_menu_open>
                        <ul class="diagram-panel__quality-menu">
                            {runtime::quality_options()
                                .into_iter()
                                .map(|(pixels, label)| {
                                    let selected = move || ui.get().quality == pixels;
                                    view! {
                                        <li
                                            class="diagram-panel__quality-option"
                                            class:selected=selected
                                            on:click=move |_| runtime::set_download_quality(pixels)
                                        >
                                            {label}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </Show>
                </div>
            </div>

            <div id="placeholder" class=move || pane_class("diagram-panel__pane", showing(ViewKind::Placeholder))>
                "Your flowchart will appear here"
            </div>
            <div id="loading" class=move || pane_class("diagram-panel__pane", showing(ViewKind::Loading))>
                <div class="spinner"></div>
                "Generating your flowchart..."
            </div>
            <div id="error" class=move || pane_class("diagram-panel__pane diagram-panel__pane--error", showing(ViewKind::Error))>
                <span id="errorMessage">{move || ui.get().error_message}</span>
            </div>
            <div id="flowchartContainer" class=move || pane_class("diagram-panel__chart-wrap", showing(ViewKind::Diagram))>
                <div id=CHART_ELEMENT_ID class="diagram-panel__chart"></div>
            </div>
        </section>
    }
}
