//! Todo App
//!
//! Page shell: summary on top, then the todo list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{SummaryPanel, TodoList};
use crate::config::ClientConfig;
use crate::context::provide_todo_store;

#[component]
pub fn App() -> impl IntoView {
    let store = provide_todo_store(ClientConfig::load());

    // Initial load on mount. A failure is logged by the store and the list
    // simply stays empty.
    Effect::new(move |_| {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.load().await;
        });
    });

    view! {
        <main class="app">
            <h1>"Todo App"</h1>
            <SummaryPanel />
            <TodoList />
        </main>
    }
}
