//! Description input with generate, clear, and the examples picker.
//!
//! SYSTEM CONTEXT
//! ==============
//! The text lives in a page-owned signal so keyboard shortcuts can submit it.
//! Generate and clear go straight to the studio; the busy flag and label
//! come back through `UiState`.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Left-hand input panel.
#[component]
pub fn InputPanel(text: RwSignal<String>, on_generate: Callback<()>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let input_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move || {
        let seq = ui.get().input_focus_seq;
        if seq == 0 {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = input_ref.get() {
                if let Err(e) = el.focus() {
                    leptos::logging::warn!("focus failed: {e:?}");
                }
            }
        }
    });

    let on_clear = move |_| {
        text.set(String::new());
        crate::host::runtime::reset();
    };

    let on_pick = move |index: usize| {
        if let Some(description) = crate::host::runtime::pick_example(index) {
            text.set(description);
        }
    };

    view! {
        <section class="input-panel">
            <label class="input-panel__label" for="processInput">
                "Describe your process"
            </label>
            <textarea
                id="processInput"
                class="input-panel__textarea"
                node_ref=input_ref
                placeholder="e.g. User signs up, verify email, if verified show welcome page"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <div class="input-panel__actions">
                <button
                    id="generateBtn"
                    class="btn btn--primary"
                    disabled=move || ui.get().generating
                    on:click=move |_| on_generate.run(())
                >
                    {move || ui.get().generate_label()}
                </button>
                <button class="btn" on:click=on_clear>
                    "Clear"
                </button>
                <button
                    class="btn input-panel__examples-toggle"
                    on:click=move |_| ui.update(|u| u.panels.toggle_examples())
                >
                    "Examples"
                </button>
            </div>
            <Show when=move || ui.get().panels.examples_open>
                <ul class="input-panel__examples">
                    {move || {
                        ui.get()
                            .examples
                            .into_iter()
                            .enumerate()
                            .map(|(index, example)| {
                                view! {
                                    <li class="input-panel__example" on:click=move |_| on_pick(index)>
                                        <div class="input-panel__example-title">{example.title}</div>
                                        <div class="input-panel__example-description">{example.description}</div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
