//! Todo Resource
//!
//! `/todos/` CRUD over HTTP.

use async_trait::async_trait;

use super::{decode, send, HttpTodoApi, TodoApi};
use crate::error::SyncResult;
use crate::models::{NewTodo, TodoId, TodoRecord};

#[async_trait(?Send)]
impl TodoApi for HttpTodoApi {
    async fn list(&self) -> SyncResult<Vec<TodoRecord>> {
        let response = send(self.client.get(self.config.todos_url())).await?;
        decode(response).await
    }

    async fn create(&self, todo: &NewTodo) -> SyncResult<TodoRecord> {
        let response = send(self.client.post(self.config.todos_url()).json(todo)).await?;
        decode(response).await
    }

    async fn update(&self, record: &TodoRecord) -> SyncResult<TodoRecord> {
        let response = send(self.client.put(self.config.todo_url(record.id)).json(record)).await?;
        decode(response).await
    }

    async fn delete(&self, id: TodoId) -> SyncResult<()> {
        // Body (the deleted record) is not needed
        send(self.client.delete(self.config.todo_url(id))).await?;
        Ok(())
    }
}
