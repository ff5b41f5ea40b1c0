//! Summary Endpoint

use async_trait::async_trait;

use super::{decode, send, HttpTodoApi, SummaryApi};
use crate::error::SyncResult;

#[async_trait(?Send)]
impl SummaryApi for HttpTodoApi {
    async fn summary(&self) -> SyncResult<String> {
        // The endpoint returns a JSON string, not plain text
        let response = send(self.client.get(self.config.summary_url())).await?;
        decode(response).await
    }
}
