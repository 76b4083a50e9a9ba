//! Transient notice shown over the page (export problems).

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn NoticeToast() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        {move || {
            ui.get().notice.map(|notice| {
                let seq = notice.seq;
                view! {
                    <div class="notice" role="status" on:click=move |_| ui.update(|u| u.dismiss_notice(seq))>
                        {notice.message}
                    </div>
                }
            })
        }}
    }
}
