//! Error types for the mock store

use apokria_client::ApiError;

/// Errors that can occur reading or writing the local database blob.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store cannot be reached (no window, storage disabled).
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),

    /// The persisted blob is not valid database JSON.
    #[error("corrupt database blob: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No event exists with the given id.
    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::UnknownEvent(id) => ApiError::UnknownEvent(id),
            // The mock plays the backend's role, so a broken backing
            // store surfaces the way an unreachable backend would.
            other => ApiError::Network(other.to_string()),
        }
    }
}
