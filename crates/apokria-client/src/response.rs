//! Backend response envelope

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Envelope-level outcome flag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// The wrapper the backend puts around every JSON payload
///
/// An envelope can be flagged `error` even on HTTP 200, so decoding always
/// goes through [`ApiResponse::into_data`] with the transport status.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: ResponseStatus,
    pub message: String,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    pub timestamp: String,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub error_code: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, rejecting error envelopes and missing data
    pub fn into_data(self, http_status: u16) -> Result<T, ApiError> {
        if self.status == ResponseStatus::Error || !(200..300).contains(&http_status) {
            return Err(ApiError::Api {
                status: http_status,
                message: self.message,
                error_code: self.error_code,
                errors: self.errors.unwrap_or_default(),
            });
        }
        self.data.ok_or(ApiError::InvalidFormat {
            status: http_status,
        })
    }
}
