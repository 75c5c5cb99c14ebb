//! Database blob layout and demo seed

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use apokria_model::Event;

/// Fixed key the blob is persisted under, shared with the TS mock layer
pub const DB_KEY: &str = "apokria_db_v1";

/// The whole mock database: one array of events
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Database {
    pub events: Vec<Event>,
}

impl Database {
    /// Demo seed written on first load so the dashboard is never empty
    pub fn seed(now: DateTime<Utc>) -> Self {
        Self {
            events: vec![Event {
                id: "evt_demo".to_string(),
                name: "TechFest 2025".to_string(),
                start_date: now,
                end_date: now + Duration::hours(24),
                venue: Some("Main Auditorium".to_string()),
                capacity: Some(200),
                schedules: Vec::new(),
                packages: Vec::new(),
                assets: Vec::new(),
                outreach: None,
            }],
        }
    }

    /// Find an event by id
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Find an event mutably by id
    pub fn event_mut(&mut self, id: &str) -> Option<&mut Event> {
        self.events.iter_mut().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seed_contents() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let db = Database::seed(now);

        assert_eq!(db.events.len(), 1);
        let demo = db.event("evt_demo").unwrap();
        assert_eq!(demo.name, "TechFest 2025");
        assert_eq!(demo.end_date - demo.start_date, Duration::hours(24));
        assert_eq!(demo.capacity, Some(200));
    }

    #[test]
    fn test_blob_round_trip() {
        let now = Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap();
        let db = Database::seed(now);

        let blob = serde_json::to_string(&db).unwrap();
        let restored: Database = serde_json::from_str(&blob).unwrap();

        assert_eq!(restored.events.len(), 1);
        assert_eq!(restored.events[0].id, "evt_demo");
    }

    #[test]
    fn test_reads_blob_written_by_ts_frontend() {
        // Shape produced by the original TypeScript mock layer.
        let blob = r#"{
            "events": [{
                "id": "evt_demo",
                "name": "TechFest 2025",
                "startDate": "2025-03-01T09:00:00.000Z",
                "endDate": "2025-03-02T09:00:00.000Z",
                "venue": "Main Auditorium",
                "capacity": 200,
                "schedules": [],
                "packages": [],
                "assets": [],
                "outreach": null
            }]
        }"#;
        let db: Database = serde_json::from_str(blob).unwrap();
        assert_eq!(db.events[0].venue.as_deref(), Some("Main Auditorium"));
    }
}
