//! Schedule items and conflict-check types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One session row in an event's generated schedule
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleItem {
    /// Unique identifier
    pub id: String,
    /// Day of the event this session falls on (1-based)
    pub day: u32,
    /// Session start
    pub start_time: DateTime<Utc>,
    /// Session end
    pub end_time: DateTime<Utc>,
    /// Session name
    pub session: String,
    /// Room, if assigned
    #[serde(default)]
    pub room: Option<String>,
}

/// A candidate time slot for the conflict check
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeSlot {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub venue: Option<String>,
}

impl TimeSlot {
    /// Create a slot; rejects inverted or empty ranges
    pub fn new(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        venue: Option<String>,
    ) -> Option<Self> {
        if start_time >= end_time {
            return None;
        }
        Some(Self {
            start_time,
            end_time,
            venue,
        })
    }

    /// Half-open interval overlap: two slots clash when each starts before
    /// the other ends. Back-to-back slots (end == start) do not clash.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        !(self.end_time <= other.start_time || other.end_time <= self.start_time)
    }
}

/// Conflict-check verdict, matching the backend's wire shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictStatus {
    Clear,
    Clash,
}

/// Result of checking a time slot against the scheduled events
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ConflictOutcome {
    pub status: ConflictStatus,
    /// Name of the first clashing event, when status is `Clash`
    #[serde(default)]
    pub conflicting_event: Option<String>,
    pub message: String,
}

impl ConflictOutcome {
    pub fn clear() -> Self {
        Self {
            status: ConflictStatus::Clear,
            conflicting_event: None,
            message: "No conflicts found".to_string(),
        }
    }

    pub fn clash(event_name: &str) -> Self {
        Self {
            status: ConflictStatus::Clash,
            conflicting_event: Some(event_name.to_string()),
            message: format!("Overlaps with {}", event_name),
        }
    }

    pub fn is_clear(&self) -> bool {
        self.status == ConflictStatus::Clear
    }
}
