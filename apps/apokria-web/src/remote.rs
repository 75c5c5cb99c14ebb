//! Async bindings over the real HTTP backend
//!
//! These mirror the [`Dashboard`](crate::Dashboard) data methods but go
//! through [`HttpClient`] instead of the mock store. The JS layer picks one
//! side at startup; both return the same JSON shapes.

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

use apokria_client::{ApiError, HttpClient};
use apokria_model::{EventDraft, TimeSlot};

/// `GET {base_url}/events`
#[wasm_bindgen]
pub async fn remote_list_events(base_url: String) -> Result<String, JsValue> {
    let events = HttpClient::new(base_url)
        .list_events()
        .await
        .map_err(api_error)?;
    to_json(&events)
}

/// `POST {base_url}/events`
#[wasm_bindgen]
pub async fn remote_create_event(base_url: String, draft_json: String) -> Result<String, JsValue> {
    let draft: EventDraft = serde_json::from_str(&draft_json)
        .map_err(|e| js_sys::Error::new(&format!("bad event draft: {e}")))?;
    let event = HttpClient::new(base_url)
        .create_event(&draft)
        .await
        .map_err(api_error)?;
    to_json(&event)
}

/// `GET {base_url}/events/{id}`
#[wasm_bindgen]
pub async fn remote_get_event(base_url: String, id: String) -> Result<String, JsValue> {
    let event = HttpClient::new(base_url)
        .get_event(&id)
        .await
        .map_err(api_error)?;
    to_json(&event)
}

/// `DELETE {base_url}/events/{id}`
#[wasm_bindgen]
pub async fn remote_delete_event(base_url: String, id: String) -> Result<(), JsValue> {
    HttpClient::new(base_url)
        .delete_event(&id)
        .await
        .map_err(api_error)
}

/// `POST {base_url}/events/{id}/schedule/generate`
#[wasm_bindgen]
pub async fn remote_generate_schedule(base_url: String, id: String) -> Result<String, JsValue> {
    let event = HttpClient::new(base_url)
        .generate_schedule(&id)
        .await
        .map_err(api_error)?;
    to_json(&event)
}

/// `POST {base_url}/events/{id}/sponsor/tiers`
#[wasm_bindgen]
pub async fn remote_generate_tiers(base_url: String, id: String) -> Result<String, JsValue> {
    let event = HttpClient::new(base_url)
        .generate_tiers(&id)
        .await
        .map_err(api_error)?;
    to_json(&event)
}

/// `POST {base_url}/events/{id}/sponsor/pdf`
#[wasm_bindgen]
pub async fn remote_generate_deck(base_url: String, id: String) -> Result<String, JsValue> {
    let event = HttpClient::new(base_url)
        .generate_deck(&id)
        .await
        .map_err(api_error)?;
    to_json(&event)
}

/// `POST {base_url}/events/{id}/outreach/generate`
#[wasm_bindgen]
pub async fn remote_generate_outreach(base_url: String, id: String) -> Result<String, JsValue> {
    let event = HttpClient::new(base_url)
        .generate_outreach(&id)
        .await
        .map_err(api_error)?;
    to_json(&event)
}

/// `GET {base_url}/check_conflict`
#[wasm_bindgen]
pub async fn remote_check_conflict(
    base_url: String,
    start_time: String,
    end_time: String,
    venue: Option<String>,
) -> Result<String, JsValue> {
    let slot = TimeSlot::new(parse_time(&start_time)?, parse_time(&end_time)?, venue)
        .ok_or_else(|| js_sys::Error::new("start_time must be before end_time"))?;
    let outcome = HttpClient::new(base_url)
        .check_conflict(&slot)
        .await
        .map_err(api_error)?;
    to_json(&outcome)
}

fn parse_time(value: &str) -> Result<DateTime<Utc>, JsValue> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|e| js_sys::Error::new(&format!("bad timestamp {value:?}: {e}")).into())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_sys::Error::new(&e.to_string()).into())
}

fn api_error(e: ApiError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}
