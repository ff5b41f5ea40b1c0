//! Todo Store
//!
//! Owns the authoritative in-memory todo collection and keeps it in step with
//! the remote resource. The collection lives in a `reactive_stores::Store`, so
//! views re-render from it; it is only ever written here, and only after the
//! server has answered.
//!
//! Operations on the same record id (`update`, `toggle`, `remove`) run one at a time, in
//! the order they were submitted. Without this, a rapid double toggle could
//! resolve out of order and leave the list showing the older state.
//! Operations on different ids, `create` and `load` are never serialized.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use log::{debug, warn};
use reactive_stores::Store;
use tokio::sync::Mutex as AsyncMutex;

use crate::api::TodoApi;
use crate::edit_state::toggled;
use crate::error::{SyncError, SyncResult};
use crate::models::{NewTodo, TodoId, TodoRecord};

/// Reactive root for the todo collection
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Server order, with fresh creates appended
    pub todos: Vec<TodoRecord>,
}

/// Handle to the todo collection and the remote it mirrors.
///
/// Cheap to clone; every clone shares the same collection.
pub struct TodoStore<A> {
    state: Store<TodoState>,
    api: Arc<A>,
    lanes: RecordLanes,
}

impl<A> Clone for TodoStore<A> {
    fn clone(&self) -> Self {
        Self {
            state: self.state,
            api: Arc::clone(&self.api),
            lanes: self.lanes.clone(),
        }
    }
}

impl<A: TodoApi> TodoStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            state: Store::new(TodoState::default()),
            api: Arc::new(api),
            lanes: RecordLanes::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    // ========================
    // Read-only projections
    // ========================

    /// Tracked read of the whole collection (for views)
    pub fn todos(&self) -> Vec<TodoRecord> {
        self.state.todos().get()
    }

    /// Untracked copy of the collection
    #[cfg(test)]
    pub fn snapshot(&self) -> Vec<TodoRecord> {
        self.state.todos().get_untracked()
    }

    pub fn get(&self, id: TodoId) -> Option<TodoRecord> {
        self.state
            .todos()
            .with_untracked(|todos| todos.iter().find(|t| t.id == id).cloned())
    }

    /// Tracked lookup, for a row following its own record
    pub fn record(&self, id: TodoId) -> Option<TodoRecord> {
        self.state
            .todos()
            .with(|todos| todos.iter().find(|t| t.id == id).cloned())
    }

    pub fn len(&self) -> usize {
        self.state.todos().with(|todos| todos.len())
    }

    pub fn completed_count(&self) -> usize {
        self.state
            .todos()
            .with(|todos| todos.iter().filter(|t| t.completed).count())
    }

    // ========================
    // Remote operations
    // ========================

    /// Replace the collection with the server's list.
    ///
    /// On failure the previous collection is kept as is.
    pub async fn load(&self) -> SyncResult<usize> {
        let records = self
            .api
            .list()
            .await
            .inspect_err(|e| warn!("load failed: {}", e))?;
        let count = records.len();
        reconcile::replace_all(&mut self.state.todos().write(), records);
        debug!("loaded {} todos", count);
        Ok(count)
    }

    /// Create a todo and append the server's record.
    ///
    /// The title is expected to be validated by the caller. Nothing is shown
    /// until the server confirms.
    pub async fn create(&self, title: &str, description: &str) -> SyncResult<TodoRecord> {
        let created = self
            .api
            .create(&NewTodo::new(title, description))
            .await
            .inspect_err(|e| warn!("create failed: {}", e))?;
        reconcile::append(&mut self.state.todos().write(), created.clone());
        debug!("created todo {}", created.id);
        Ok(created)
    }

    /// Send `record` as the full new representation of its id.
    ///
    /// The collection takes the server's answer, which may differ from what
    /// was sent.
    pub async fn update(&self, record: TodoRecord) -> SyncResult<TodoRecord> {
        self.in_lane(record.id, self.send_update(record)).await
    }

    /// Flip completion of `id`.
    ///
    /// The flip is taken from the collection once earlier operations on `id`
    /// are done, so two quick toggles end where they started.
    pub async fn toggle(&self, id: TodoId) -> SyncResult<TodoRecord> {
        self.in_lane(id, async {
            let current = self.get(id).ok_or(SyncError::Missing(id))?;
            self.send_update(toggled(&current)).await
        })
        .await
    }

    pub async fn remove(&self, id: TodoId) -> SyncResult<()> {
        self.in_lane(id, async {
            self.api
                .delete(id)
                .await
                .inspect_err(|e| warn!("delete of {} failed: {}", id, e))?;
            reconcile::remove(&mut self.state.todos().write(), id);
            debug!("removed todo {}", id);
            Ok(())
        })
        .await
    }

    async fn send_update(&self, record: TodoRecord) -> SyncResult<TodoRecord> {
        let id = record.id;
        let saved = self
            .api
            .update(&record)
            .await
            .inspect_err(|e| warn!("update of {} failed: {}", id, e))?;
        reconcile::replace(&mut self.state.todos().write(), id, saved.clone());
        Ok(saved)
    }

    /// Run `op` once every earlier operation on `id` has finished.
    async fn in_lane<T>(&self, id: TodoId, op: impl std::future::Future<Output = T>) -> T {
        let lane = self.lanes.lane(id);
        let result = {
            let _turn = lane.lock().await;
            op.await
        };
        self.lanes.release(id, lane);
        result
    }
}

/// One FIFO lock per record id with pending work
#[derive(Clone, Default)]
struct RecordLanes {
    lanes: Arc<Mutex<HashMap<TodoId, Arc<AsyncMutex<()>>>>>,
}

impl RecordLanes {
    fn lane(&self, id: TodoId) -> Arc<AsyncMutex<()>> {
        let mut lanes = self.lanes.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(lanes.entry(id).or_default())
    }

    /// Drop the lane once nobody else is queued on it
    fn release(&self, id: TodoId, lane: Arc<AsyncMutex<()>>) {
        let mut lanes = self.lanes.lock().unwrap_or_else(PoisonError::into_inner);
        drop(lane);
        if lanes.get(&id).is_some_and(|l| Arc::strong_count(l) == 1) {
            lanes.remove(&id);
        }
    }

    #[cfg(test)]
    fn active(&self) -> usize {
        self.lanes.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Applying server answers to the local collection
mod reconcile {
    use crate::models::{TodoId, TodoRecord};

    pub fn replace_all(todos: &mut Vec<TodoRecord>, records: Vec<TodoRecord>) {
        *todos = records;
    }

    /// Push at the end; an id already present is replaced where it stands
    pub fn append(todos: &mut Vec<TodoRecord>, record: TodoRecord) {
        match todos.iter_mut().find(|t| t.id == record.id) {
            Some(existing) => *existing = record,
            None => todos.push(record),
        }
    }

    /// Never inserts: a record removed meanwhile stays removed
    pub fn replace(todos: &mut [TodoRecord], id: TodoId, record: TodoRecord) {
        if let Some(existing) = todos.iter_mut().find(|t| t.id == id) {
            *existing = record;
        }
    }

    pub fn remove(todos: &mut Vec<TodoRecord>, id: TodoId) {
        todos.retain(|t| t.id != id);
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn todo(id: TodoId, title: &str) -> TodoRecord {
            TodoRecord {
                id,
                title: title.to_string(),
                description: None,
                completed: false,
                due_date: None,
                created_at: None,
            }
        }

        #[test]
        fn test_append_keeps_ids_unique() {
            let mut todos = vec![todo(1, "A"), todo(2, "B")];
            append(&mut todos, todo(1, "A2"));
            assert_eq!(todos.len(), 2);
            assert_eq!(todos[0].title, "A2");

            append(&mut todos, todo(3, "C"));
            assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        }

        #[test]
        fn test_replace_does_not_resurrect() {
            let mut todos = vec![todo(2, "B")];
            replace(&mut todos, 1, todo(1, "A"));
            assert_eq!(todos, vec![todo(2, "B")]);
        }

        #[test]
        fn test_remove_only_matching() {
            let mut todos = vec![todo(1, "A"), todo(2, "B"), todo(3, "C")];
            remove(&mut todos, 2);
            assert_eq!(todos, vec![todo(1, "A"), todo(3, "C")]);
        }
    }
}
