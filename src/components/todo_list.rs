//! Todo List Component
//!
//! Creation form plus one `TodoItem` per record in the store.

use leptos::prelude::*;

use crate::components::{NewTodoForm, TodoItem};
use crate::context::use_todo_store;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_todo_store();
    let counts = store.clone();

    view! {
        <div class="todo-list">
            <NewTodoForm />

            <For
                each=move || store.todos()
                // Keyed by id: a row (and its open draft) outlives changes to its record
                key=|todo| todo.id
                children=move |todo| view! { <TodoItem id=todo.id /> }
            />

            <p class="todo-count">
                {move || format!("{} todos, {} completed", counts.len(), counts.completed_count())}
            </p>
        </div>
    }
}
