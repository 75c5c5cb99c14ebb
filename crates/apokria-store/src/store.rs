//! The mock store: [`EventsApi`] over a persisted JSON blob

use chrono::{DateTime, Utc};
use uuid::Uuid;

use apokria_client::{ApiError, EventsApi};
use apokria_model::{ConflictOutcome, Event, EventDraft, TimeSlot};

use crate::blob::BlobStore;
use crate::conflict;
use crate::db::Database;
use crate::error::StoreError;
use crate::generate;

/// Backend stand-in over any [`BlobStore`].
///
/// Every operation loads the whole database, mutates it, and writes it
/// back, the same way the original mock layer round-tripped through
/// `localStorage` on each call.
pub struct MockStore<B: BlobStore> {
    blob: B,
    clock: fn() -> DateTime<Utc>,
}

impl<B: BlobStore> MockStore<B> {
    pub fn new(blob: B) -> Self {
        Self {
            blob,
            clock: Utc::now,
        }
    }

    /// Replace the wall clock, for deterministic seeds and ids in tests
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Load the database, seeding and persisting the demo data on first use
    fn load(&self) -> Result<Database, StoreError> {
        match self.blob.load()? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                let db = Database::seed((self.clock)());
                self.save(&db)?;
                Ok(db)
            }
        }
    }

    fn save(&self, db: &Database) -> Result<(), StoreError> {
        let raw = serde_json::to_string(db).map_err(StoreError::Corrupt)?;
        self.blob.save(&raw)
    }

    /// Load, apply `f` to the named event, persist, and return the event
    fn update_event(
        &self,
        id: &str,
        f: impl FnOnce(&mut Event),
    ) -> Result<Event, StoreError> {
        let mut db = self.load()?;
        let event = db
            .event_mut(id)
            .ok_or_else(|| StoreError::UnknownEvent(id.to_string()))?;
        f(event);
        let updated = event.clone();
        self.save(&db)?;
        Ok(updated)
    }

    fn new_event_id() -> String {
        let uuid = Uuid::new_v4().simple().to_string();
        format!("evt_{}", &uuid[..6])
    }
}

impl<B: BlobStore> EventsApi for MockStore<B> {
    fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        Ok(self.load()?.events)
    }

    fn create_event(&self, draft: EventDraft) -> Result<Event, ApiError> {
        let mut db = self.load()?;
        let event = draft.materialize(Self::new_event_id(), (self.clock)());
        // Newest first, matching the dashboard's listing order
        db.events.insert(0, event.clone());
        self.save(&db)?;
        Ok(event)
    }

    fn get_event(&self, id: &str) -> Result<Event, ApiError> {
        self.load()?
            .event(id)
            .cloned()
            .ok_or_else(|| ApiError::UnknownEvent(id.to_string()))
    }

    fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let mut db = self.load()?;
        // Deleting an unknown id is a silent no-op, like the backend
        db.events.retain(|e| e.id != id);
        self.save(&db)?;
        Ok(())
    }

    fn generate_schedule(&self, id: &str) -> Result<Event, ApiError> {
        Ok(self.update_event(id, |event| {
            event.schedules = generate::schedule(event);
        })?)
    }

    fn generate_tiers(&self, id: &str) -> Result<Event, ApiError> {
        Ok(self.update_event(id, |event| {
            event.packages = generate::tiers();
        })?)
    }

    fn generate_deck(&self, id: &str) -> Result<Event, ApiError> {
        Ok(self.update_event(id, |event| {
            let version = event.assets.len() as u32 + 1;
            event.assets.push(generate::deck(version));
        })?)
    }

    fn generate_outreach(&self, id: &str) -> Result<Event, ApiError> {
        Ok(self.update_event(id, |event| {
            event.outreach = Some(generate::outreach(event));
        })?)
    }

    fn check_conflict(&self, slot: &TimeSlot) -> Result<ConflictOutcome, ApiError> {
        Ok(conflict::check(slot, &self.load()?.events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::MemoryBlob;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn store() -> MockStore<MemoryBlob> {
        MockStore::new(MemoryBlob::new()).with_clock(fixed_now)
    }

    #[test]
    fn test_first_load_seeds_demo_event() {
        let store = store();
        let events = store.list_events().unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "evt_demo");
        assert_eq!(events[0].start_date, fixed_now());
    }

    #[test]
    fn test_created_event_listed_first() {
        let store = store();
        let created = store
            .create_event(EventDraft {
                name: Some("Robotics Week".to_string()),
                ..Default::default()
            })
            .unwrap();

        assert!(created.id.starts_with("evt_"));
        assert_eq!(created.id.len(), "evt_".len() + 6);

        let events = store.list_events().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, created.id);
        assert_eq!(events[1].id, "evt_demo");
    }

    #[test]
    fn test_get_unknown_event_errors() {
        let err = store().get_event("evt_nope").unwrap_err();
        assert!(matches!(err, ApiError::UnknownEvent(id) if id == "evt_nope"));
    }

    #[test]
    fn test_delete_unknown_event_is_noop() {
        let store = store();
        store.delete_event("evt_nope").unwrap();
        assert_eq!(store.list_events().unwrap().len(), 1);
    }

    #[test]
    fn test_generators_persist_onto_event() {
        let store = store();

        let event = store.generate_schedule("evt_demo").unwrap();
        assert_eq!(event.schedules.len(), 4);

        let event = store.generate_tiers("evt_demo").unwrap();
        assert_eq!(event.packages.len(), 3);

        let event = store.generate_outreach("evt_demo").unwrap();
        assert!(event.outreach.is_some());

        // All of it survived the blob round trips
        let reloaded = store.get_event("evt_demo").unwrap();
        assert_eq!(reloaded.schedules.len(), 4);
        assert_eq!(reloaded.packages.len(), 3);
        assert!(reloaded.outreach.is_some());
    }

    #[test]
    fn test_deck_version_counts_up() {
        let store = store();

        let event = store.generate_deck("evt_demo").unwrap();
        assert_eq!(event.assets.last().unwrap().version, 1);

        let event = store.generate_deck("evt_demo").unwrap();
        assert_eq!(event.assets.last().unwrap().version, 2);
        assert_eq!(event.assets.len(), 2);
    }

    #[test]
    fn test_generator_on_unknown_event_errors() {
        let err = store().generate_schedule("evt_nope").unwrap_err();
        assert!(matches!(err, ApiError::UnknownEvent(_)));
    }

    #[test]
    fn test_conflict_against_seeded_event() {
        let store = store();

        let clash = TimeSlot::new(
            fixed_now(),
            fixed_now() + chrono::Duration::hours(2),
            Some("Main Auditorium".to_string()),
        )
        .unwrap();
        let outcome = store.check_conflict(&clash).unwrap();
        assert_eq!(outcome.conflicting_event.as_deref(), Some("TechFest 2025"));

        let clear = TimeSlot::new(
            fixed_now() + chrono::Duration::days(7),
            fixed_now() + chrono::Duration::days(7) + chrono::Duration::hours(2),
            None,
        )
        .unwrap();
        assert!(store.check_conflict(&clear).unwrap().is_clear());
    }

    #[test]
    fn test_corrupt_blob_surfaces_as_network_error() {
        let store = MockStore::new(MemoryBlob::with_contents("not json"));
        let err = store.list_events().unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
