//! Todo Item Component
//!
//! One record row, switching between view and edit mode. The row follows its
//! record in the store by id, so the edit state survives server answers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_todo_store;
use crate::edit_state::ItemEditState;
use crate::models::TodoId;

#[component]
pub fn TodoItem(id: TodoId) -> impl IntoView {
    let store = use_todo_store();

    let record = {
        let store = store.clone();
        Memo::new(move |_| store.record(id))
    };
    let edit = RwSignal::new(ItemEditState::default());
    // Only flips on enter/leave, so typing doesn't rebuild the inputs
    let editing = Memo::new(move |_| edit.with(|state| state.is_editing()));
    // Bumped to push the checkbox back after a refused toggle
    let revision = RwSignal::new(0u32);

    let toggle = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            let store = store.clone();
            spawn_local(async move {
                if store.toggle(id).await.is_err() {
                    let _ = revision.try_update(|n| *n += 1);
                }
            });
        })
    };

    let save = {
        let store = store.clone();
        Callback::new(move |_: ()| {
            let Some(current) = record.get_untracked() else {
                return;
            };
            let mut merged = None;
            edit.update(|state| merged = state.save(&current));
            if let Some(merged) = merged {
                let store = store.clone();
                spawn_local(async move {
                    let _ = store.update(merged).await;
                });
            }
        })
    };

    let remove = Callback::new(move |_: ()| {
        let store = store.clone();
        spawn_local(async move {
            let _ = store.remove(id).await;
        });
    });

    let begin_edit = move |_| {
        record.with_untracked(|current| {
            if let Some(current) = current {
                edit.update(|state| state.begin_edit(current));
            }
        })
    };

    let completed = move || record.with(|r| r.as_ref().is_some_and(|r| r.completed));
    let title = move || record.with(|r| r.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let description =
        move || record.with(|r| r.as_ref().map(|r| r.description_text().to_string()).unwrap_or_default());
    let due = move || record.with(|r| r.as_ref().and_then(|r| r.due_date.clone()));

    let draft_title = move || edit.with(|state| state.draft().map(|d| d.title.clone()).unwrap_or_default());
    let draft_description =
        move || edit.with(|state| state.draft().map(|d| d.description.clone()).unwrap_or_default());

    view! {
        <div class="todo-item">
            {move || if editing.get() {
                view! {
                    <div class="todo-edit">
                        <input
                            type="text"
                            prop:value=draft_title
                            on:input=move |ev| edit.update(|state| state.set_title(event_target_value(&ev)))
                        />
                        <textarea
                            prop:value=draft_description
                            on:input=move |ev| edit.update(|state| state.set_description(event_target_value(&ev)))
                        ></textarea>
                        <div class="todo-edit-actions">
                            <button class="save-btn" on:click=move |_| save.run(())>"Save"</button>
                            <button class="cancel-btn" on:click=move |_| edit.update(|state| state.cancel())>"Cancel"</button>
                        </div>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="todo-view">
                        <input
                            type="checkbox"
                            prop:checked=move || {
                                revision.track();
                                completed()
                            }
                            on:change=move |_| toggle.run(())
                        />
                        <div class="todo-body">
                            <h2 class=move || if completed() { "todo-title completed" } else { "todo-title" }>
                                {title}
                            </h2>
                            <p class="todo-description">{description}</p>
                            {move || due().map(|due| view! { <p class="todo-due">"Due: " {due}</p> })}
                        </div>
                    </div>
                    <div class="todo-actions">
                        <button class="edit-btn" on:click=begin_edit>"Edit"</button>
                        <button class="delete-btn" on:click=move |_| remove.run(())>"Delete"</button>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
