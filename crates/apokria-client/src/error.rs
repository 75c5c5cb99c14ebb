//! Error types for backend requests
//!
//! Every failure a panel can see when it talks to the data layer, whether
//! the backend is the real HTTP API or the local mock store.

/// Errors surfaced by the events API.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with an error envelope or a non-2xx status.
    #[error("api error (HTTP {status}): {message}")]
    Api {
        status: u16,
        message: String,
        /// Machine-readable code from the envelope, when present
        error_code: Option<String>,
        /// Per-field detail messages from the envelope
        errors: Vec<String>,
    },

    /// The response body was not the expected JSON envelope.
    #[error("invalid response format (HTTP {status})")]
    InvalidFormat { status: u16 },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// No event exists with the given id.
    #[error("unknown event: {0}")]
    UnknownEvent(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the request got that far
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } | ApiError::InvalidFormat { status } => Some(*status),
            ApiError::Network(_) | ApiError::UnknownEvent(_) => None,
        }
    }
}
