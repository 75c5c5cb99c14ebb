//! Events API contract

use apokria_model::{ConflictOutcome, Event, EventDraft, TimeSlot};

use crate::error::ApiError;

/// The event operations every data backend exposes.
///
/// Implemented synchronously by the mock store; the HTTP client mirrors
/// the same operations asynchronously over the resource paths noted below.
pub trait EventsApi {
    /// `GET /events`
    fn list_events(&self) -> Result<Vec<Event>, ApiError>;

    /// `POST /events`
    fn create_event(&self, draft: EventDraft) -> Result<Event, ApiError>;

    /// `GET /events/{id}`
    fn get_event(&self, id: &str) -> Result<Event, ApiError>;

    /// `DELETE /events/{id}`
    fn delete_event(&self, id: &str) -> Result<(), ApiError>;

    /// `POST /events/{id}/schedule/generate`
    fn generate_schedule(&self, id: &str) -> Result<Event, ApiError>;

    /// `POST /events/{id}/sponsor/tiers`
    fn generate_tiers(&self, id: &str) -> Result<Event, ApiError>;

    /// `POST /events/{id}/sponsor/pdf`
    fn generate_deck(&self, id: &str) -> Result<Event, ApiError>;

    /// `POST /events/{id}/outreach/generate`
    fn generate_outreach(&self, id: &str) -> Result<Event, ApiError>;

    /// `GET /check_conflict`
    fn check_conflict(&self, slot: &TimeSlot) -> Result<ConflictOutcome, ApiError>;
}
