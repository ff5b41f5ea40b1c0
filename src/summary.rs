//! Summary Adapter
//!
//! Unlike the CRUD path, summary failures are shown to the user.

use crate::api::SummaryApi;
use crate::error::SyncError;

pub const FETCH_FAILED: &str = "Failed to fetch summary";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SummaryState {
    #[default]
    Loading,
    Ready(String),
    Failed(String),
}

impl SummaryState {
    pub fn from_result(result: Result<String, SyncError>) -> Self {
        match result {
            Ok(text) => SummaryState::Ready(text),
            Err(SyncError::Status { .. }) => SummaryState::Failed(FETCH_FAILED.to_string()),
            Err(e) => SummaryState::Failed(e.to_string()),
        }
    }
}

pub async fn load_summary<A: SummaryApi>(api: &A) -> SummaryState {
    let state = SummaryState::from_result(api.summary().await);
    if let SummaryState::Failed(reason) = &state {
        log::warn!("summary unavailable: {}", reason);
    }
    state
}
