//! Time conflict check over the stored events

use apokria_model::{ConflictOutcome, Event, TimeSlot};

/// Check a candidate slot against every stored event.
///
/// Overlap is purely temporal: two slots clash when each starts before
/// the other ends, whatever their venues. The slot's venue rides along on
/// the wire but does not gate the verdict. Events with inverted or empty
/// date ranges are skipped rather than treated as clashes.
pub fn check(slot: &TimeSlot, events: &[Event]) -> ConflictOutcome {
    for event in events {
        let Some(event_slot) = TimeSlot::new(event.start_date, event.end_date, event.venue.clone())
        else {
            continue;
        };
        if slot.overlaps(&event_slot) {
            return ConflictOutcome::clash(&event.name);
        }
    }
    ConflictOutcome::clear()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, hour, 0, 0).unwrap()
    }

    fn event(name: &str, start: u32, end: u32, venue: Option<&str>) -> Event {
        Event {
            id: format!("evt_{name}"),
            name: name.to_string(),
            start_date: at(start),
            end_date: at(end),
            venue: venue.map(str::to_string),
            capacity: None,
            schedules: Vec::new(),
            packages: Vec::new(),
            assets: Vec::new(),
            outreach: None,
        }
    }

    #[test]
    fn test_clash_reports_first_overlapping_event() {
        let events = vec![
            event("Expo", 9, 11, Some("Hall A")),
            event("Summit", 10, 12, Some("Hall A")),
        ];
        let slot = TimeSlot::new(at(10), at(13), Some("Hall A".to_string())).unwrap();

        let outcome = check(&slot, &events);
        assert_eq!(outcome.conflicting_event.as_deref(), Some("Expo"));
    }

    #[test]
    fn test_different_venues_still_clash_on_time() {
        let events = vec![event("Expo", 9, 11, Some("Hall A"))];
        let slot = TimeSlot::new(at(10), at(12), Some("Hall B".to_string())).unwrap();

        let outcome = check(&slot, &events);
        assert_eq!(outcome.conflicting_event.as_deref(), Some("Expo"));
    }

    #[test]
    fn test_missing_venue_clashes_on_time() {
        let events = vec![event("Expo", 9, 11, Some("Hall A"))];
        let slot = TimeSlot::new(at(10), at(12), None).unwrap();

        assert!(!check(&slot, &events).is_clear());
    }

    #[test]
    fn test_back_to_back_is_clear() {
        let events = vec![event("Expo", 9, 11, None)];
        let slot = TimeSlot::new(at(11), at(13), None).unwrap();

        assert!(check(&slot, &events).is_clear());
    }

    #[test]
    fn test_inverted_event_range_is_skipped() {
        let events = vec![event("Broken", 12, 9, None)];
        let slot = TimeSlot::new(at(9), at(12), None).unwrap();

        assert!(check(&slot, &events).is_clear());
    }
}
