//! Event entity and creation draft

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::schedule::ScheduleItem;
use crate::sponsor::{OutreachBundle, SponsorPackage};

/// A campus event with everything the dashboard panels hang off it
///
/// The collections start empty and are filled in by the schedule, sponsor,
/// deck, and outreach generators. `outreach` stays `None` until generated.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier (`evt_` prefix)
    pub id: String,
    /// Display name
    pub name: String,
    /// Event start (RFC 3339 on the wire)
    pub start_date: DateTime<Utc>,
    /// Event end
    pub end_date: DateTime<Utc>,
    /// Venue name, if decided
    #[serde(default)]
    pub venue: Option<String>,
    /// Expected attendee capacity
    #[serde(default)]
    pub capacity: Option<u32>,
    /// Generated session schedule
    #[serde(default)]
    pub schedules: Vec<ScheduleItem>,
    /// Generated sponsorship tiers
    #[serde(default)]
    pub packages: Vec<SponsorPackage>,
    /// Generated downloadable assets (sponsor deck etc.)
    #[serde(default)]
    pub assets: Vec<Asset>,
    /// Generated outreach copy
    #[serde(default)]
    pub outreach: Option<OutreachBundle>,
}

/// Partial payload for creating an event
///
/// Every field is optional; [`EventDraft::materialize`] applies the same
/// defaults the dashboard's create form relies on.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
}

impl EventDraft {
    /// Build a full event from the draft, filling gaps with defaults
    ///
    /// `now` is injected by the caller; this crate never reads a clock.
    pub fn materialize(self, id: String, now: DateTime<Utc>) -> Event {
        Event {
            id,
            name: self.name.unwrap_or_else(|| "Untitled Event".to_string()),
            start_date: self.start_date.unwrap_or(now),
            end_date: self.end_date.unwrap_or(now),
            venue: self.venue,
            capacity: self.capacity,
            schedules: Vec::new(),
            packages: Vec::new(),
            assets: Vec::new(),
            outreach: None,
        }
    }
}
