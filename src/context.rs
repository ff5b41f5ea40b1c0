//! Application Context
//!
//! The todo store is created once by `App` and handed to components through
//! the Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpTodoApi;
use crate::config::ClientConfig;
use crate::store::TodoStore;

/// Store type used by the running app
pub type AppTodoStore = TodoStore<HttpTodoApi>;

/// Build the store for `config` and provide it to all children
pub fn provide_todo_store(config: ClientConfig) -> AppTodoStore {
    log::info!("using todo service at {}", config.api_base);
    let store = TodoStore::new(HttpTodoApi::new(config));
    provide_context(store.clone());
    store
}

/// Get the todo store from context
pub fn use_todo_store() -> AppTodoStore {
    expect_context::<AppTodoStore>()
}
