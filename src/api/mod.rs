//! Remote Service Bindings
//!
//! HTTP bindings to the todo resource and the summary endpoint, organized by
//! resource. The traits are the seam the store and the summary adapter are
//! written against.

mod todo;
mod summary;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{SyncError, SyncResult};
use crate::models::{NewTodo, TodoId, TodoRecord};

/// CRUD operations on the remote todo collection
#[async_trait(?Send)]
pub trait TodoApi {
    /// `GET /todos/`
    async fn list(&self) -> SyncResult<Vec<TodoRecord>>;
    /// `POST /todos/`
    async fn create(&self, todo: &NewTodo) -> SyncResult<TodoRecord>;
    /// `PUT /todos/{id}` with the full record
    async fn update(&self, record: &TodoRecord) -> SyncResult<TodoRecord>;
    /// `DELETE /todos/{id}`
    async fn delete(&self, id: TodoId) -> SyncResult<()>;
}

/// Read-only summary text
#[async_trait(?Send)]
pub trait SummaryApi {
    /// `GET /todos/summary`
    async fn summary(&self) -> SyncResult<String>;
}

/// reqwest-backed client (browser fetch on wasm32)
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTodoApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

/// Send a request and turn non-2xx answers into `SyncError::Status`
async fn send(request: reqwest::RequestBuilder) -> SyncResult<reqwest::Response> {
    let response = request
        .send()
        .await
        .map_err(|e| SyncError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        let message = response.text().await.unwrap_or_default();
        Err(SyncError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> SyncResult<T> {
    response
        .json::<T>()
        .await
        .map_err(|e| SyncError::Decode(e.to_string()))
}
