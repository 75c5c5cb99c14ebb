//! Domain types for the Apokria event dashboard
//!
//! These types mirror the JSON wire shapes exchanged with the backend and
//! persisted by the mock store, so field names serialize in camelCase.

mod asset;
mod event;
mod schedule;
mod sponsor;

pub use asset::{Asset, AssetKind};
pub use event::{Event, EventDraft};
pub use schedule::{ConflictOutcome, ConflictStatus, ScheduleItem, TimeSlot};
pub use sponsor::{OutreachBundle, SponsorPackage};
