//! Fetch-based HTTP client
//!
//! Browser-only implementation of the events API over `window.fetch`.
//! Bodies and envelopes are JSON; failures map onto [`ApiError`] without
//! any retry.

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, UrlSearchParams};

use apokria_model::{ConflictOutcome, Event, EventDraft, TimeSlot};

use crate::error::ApiError;
use crate::response::ApiResponse;

/// HTTP client bound to one backend base URL
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    /// Create a client; `base_url` has no trailing slash
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// `GET /events`
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        self.request("GET", "/events", None).await
    }

    /// `POST /events`
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event, ApiError> {
        let body = serde_json::to_string(draft)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        self.request("POST", "/events", Some(body)).await
    }

    /// `GET /events/{id}`
    pub async fn get_event(&self, id: &str) -> Result<Event, ApiError> {
        self.request("GET", &format!("/events/{}", id), None).await
    }

    /// `DELETE /events/{id}`
    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        // The envelope's data field is an empty object on delete.
        let _: serde_json::Value = self
            .request("DELETE", &format!("/events/{}", id), None)
            .await?;
        Ok(())
    }

    /// `POST /events/{id}/schedule/generate`
    pub async fn generate_schedule(&self, id: &str) -> Result<Event, ApiError> {
        self.request("POST", &format!("/events/{}/schedule/generate", id), None)
            .await
    }

    /// `POST /events/{id}/sponsor/tiers`
    pub async fn generate_tiers(&self, id: &str) -> Result<Event, ApiError> {
        self.request("POST", &format!("/events/{}/sponsor/tiers", id), None)
            .await
    }

    /// `POST /events/{id}/sponsor/pdf`
    pub async fn generate_deck(&self, id: &str) -> Result<Event, ApiError> {
        self.request("POST", &format!("/events/{}/sponsor/pdf", id), None)
            .await
    }

    /// `POST /events/{id}/outreach/generate`
    pub async fn generate_outreach(&self, id: &str) -> Result<Event, ApiError> {
        self.request("POST", &format!("/events/{}/outreach/generate", id), None)
            .await
    }

    /// `GET /check_conflict?start_time=..&end_time=..[&venue=..]`
    pub async fn check_conflict(&self, slot: &TimeSlot) -> Result<ConflictOutcome, ApiError> {
        let params = UrlSearchParams::new().map_err(js_error)?;
        params.append("start_time", &slot.start_time.to_rfc3339());
        params.append("end_time", &slot.end_time.to_rfc3339());
        if let Some(venue) = &slot.venue {
            params.append("venue", venue);
        }
        let query: String = params.to_string().into();
        self.request("GET", &format!("/check_conflict?{}", query), None)
            .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = body {
            opts.set_body(&JsValue::from_str(&body));
        }

        let url = format!("{}{}", self.base_url, path);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window =
            web_sys::window().ok_or_else(|| ApiError::Network("no window object".to_string()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| ApiError::Network("fetch returned a non-Response".to_string()))?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let text = text
            .as_string()
            .ok_or(ApiError::InvalidFormat { status })?;

        let envelope: ApiResponse<T> =
            serde_json::from_str(&text).map_err(|_| ApiError::InvalidFormat { status })?;
        envelope.into_data(status)
    }
}

fn js_error(value: JsValue) -> ApiError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| "unknown JS error".to_string());
    ApiError::Network(message)
}
