//! Summary Panel Component
//!
//! Shows the server-generated summary with its loading/error/success state.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_store;
use crate::summary::{load_summary, SummaryState};

#[component]
pub fn SummaryPanel() -> impl IntoView {
    let store = use_todo_store();
    let (state, set_state) = signal(SummaryState::Loading);

    let fetch = Callback::new(move |_: ()| {
        set_state.set(SummaryState::Loading);
        let store = store.clone();
        spawn_local(async move {
            let next = load_summary(store.api()).await;
            set_state.set(next);
        });
    });

    // Fetch once on mount
    Effect::new(move |_| fetch.run(()));

    view! {
        <section class="summary">
            <h2>"AI-Powered Summary"</h2>
            {move || match state.get() {
                SummaryState::Loading => view! { <p class="summary-loading">"Generating summary..."</p> }.into_any(),
                SummaryState::Failed(reason) => view! { <p class="summary-error">"Error: " {reason}</p> }.into_any(),
                SummaryState::Ready(text) => view! { <pre class="summary-text">{text}</pre> }.into_any(),
            }}
            <button
                class="summary-refresh"
                disabled=move || state.with(|s| *s == SummaryState::Loading)
                on:click=move |_| fetch.run(())
            >
                "Refresh"
            </button>
        </section>
    }
}
