//! API contract for the Apokria backend
//!
//! Defines the typed error surface, the response envelope the backend
//! wraps every payload in, and the [`EventsApi`] trait naming the event
//! operations. The mock store implements the trait synchronously; the
//! [`HttpClient`] (behind the `wasm` feature) mirrors the same operation
//! set over `fetch`. The UI treats whichever backend it holds as a black
//! box: on failure it shows a notification and leaves prior state alone.
//! No retries anywhere.

mod api;
mod error;
mod response;

#[cfg(feature = "wasm")]
mod http;

pub use api::EventsApi;
pub use error::ApiError;
pub use response::{ApiResponse, ResponseStatus};

#[cfg(feature = "wasm")]
pub use http::HttpClient;
