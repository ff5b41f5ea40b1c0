//! New Todo Form Component
//!
//! Title + description form feeding `TodoStore::create`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_store;
use crate::models::is_valid_title;

/// Empty `field` unless the user has changed it since `submitted` was sent
fn clear_if_submitted(field: &mut String, submitted: &str) {
    if field == submitted {
        field.clear();
    }
}

#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_todo_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let new_title = title.get_untracked();
        if !is_valid_title(&new_title) {
            return;
        }
        let new_description = description.get_untracked();
        let store = store.clone();

        spawn_local(async move {
            // Keep what was typed if the server refused it, or typed since
            if store.create(&new_title, &new_description).await.is_ok() {
                set_title.update(|current| clear_if_submitted(current, &new_title));
                set_description.update(|current| clear_if_submitted(current, &new_description));
            }
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <input
                type="text"
                placeholder="Title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>
            <button type="submit" class="add-btn">"Add Todo"</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clears_untouched_field() {
        let mut title = "Buy milk".to_string();
        clear_if_submitted(&mut title, "Buy milk");
        assert_eq!(title, "");
    }

    #[test]
    fn test_keeps_text_typed_during_create() {
        let mut title = "Walk dog".to_string();
        clear_if_submitted(&mut title, "Buy milk");
        assert_eq!(title, "Walk dog");
    }
}
