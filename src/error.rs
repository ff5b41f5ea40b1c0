//! Sync Errors
//!
//! Failures of a remote todo/summary call.

use thiserror::Error;

use crate::models::TodoId;

/// Why a remote operation did not succeed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Request never reached or never returned from the server
    #[error("Request failed: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("Server error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// Record is not in the local collection
    #[error("Todo {0} is not loaded")]
    Missing(TodoId),

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    Decode(String),
}

pub type SyncResult<T> = Result<T, SyncError>;
