//! Client-side content generators
//!
//! Fabricate the JSON the real backend's agents would return: a fixed
//! two-day schedule, three sponsorship tiers, a versioned deck asset, and
//! outreach copy interpolated from the event.

use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use apokria_model::{Asset, AssetKind, Event, OutreachBundle, ScheduleItem, SponsorPackage};

/// Pin a timestamp to hour:minute on the same day
fn at(day: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    day.date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .unwrap_or(day)
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Two-day demo schedule anchored to the event's start and end days
pub fn schedule(event: &Event) -> Vec<ScheduleItem> {
    let d1 = event.start_date;
    let d2 = event.end_date;
    vec![
        ScheduleItem {
            id: new_id(),
            day: 1,
            start_time: at(d1, 9, 0),
            end_time: at(d1, 11, 0),
            session: "Hackathon Kickoff".to_string(),
            room: Some("Hall A".to_string()),
        },
        ScheduleItem {
            id: new_id(),
            day: 1,
            start_time: at(d1, 11, 30),
            end_time: at(d1, 13, 0),
            session: "Workshop: Robotics 101".to_string(),
            room: Some("Lab 2".to_string()),
        },
        ScheduleItem {
            id: new_id(),
            day: 2,
            start_time: at(d2, 10, 0),
            end_time: at(d2, 12, 0),
            session: "Pitch Round".to_string(),
            room: Some("Auditorium".to_string()),
        },
        ScheduleItem {
            id: new_id(),
            day: 2,
            start_time: at(d2, 16, 0),
            end_time: at(d2, 17, 0),
            session: "Awards & Closing".to_string(),
            room: Some("Auditorium".to_string()),
        },
    ]
}

/// Gold/Silver/Bronze sponsorship tiers
pub fn tiers() -> Vec<SponsorPackage> {
    vec![
        SponsorPackage {
            id: new_id(),
            tier: "Gold".to_string(),
            benefits: vec![
                "Stage logo".to_string(),
                "Keynote mention".to_string(),
                "Stall".to_string(),
                "5 VIP passes".to_string(),
            ],
            price: Some(100_000),
        },
        SponsorPackage {
            id: new_id(),
            tier: "Silver".to_string(),
            benefits: vec![
                "Backdrop logo".to_string(),
                "Stall".to_string(),
                "3 passes".to_string(),
            ],
            price: Some(50_000),
        },
        SponsorPackage {
            id: new_id(),
            tier: "Bronze".to_string(),
            benefits: vec!["Website logo".to_string(), "2 passes".to_string()],
            price: Some(25_000),
        },
    ]
}

/// Next sponsor-deck asset; `version` is one past the current asset count
pub fn deck(version: u32) -> Asset {
    Asset {
        id: new_id(),
        kind: AssetKind::Pdf,
        url: "/sample-sponsor-deck.pdf".to_string(),
        version,
        locale: Some("en".to_string()),
    }
}

/// Outreach copy interpolated from the event's details
pub fn outreach(event: &Event) -> OutreachBundle {
    let start = event.start_date.format("%a %b %d %Y");
    let end = event.end_date.format("%a %b %d %Y");
    let capacity = event
        .capacity
        .map(|c| c.to_string())
        .unwrap_or_else(|| "200".to_string());
    let venue = event.venue.as_deref().unwrap_or("campus");

    OutreachBundle {
        email_sponsor: format!(
            "Subject: Partner with {name}\n\nHello Team,\nWe're hosting {name} on {start}\u{2013}{end}. Expecting {capacity}+ attendees. Sponsorship tiers attached.",
            name = event.name,
        ),
        email_participants: format!(
            "Subject: Register for {name}!\n\nJoin us {start}\u{2013}{end} at {venue}.",
            name = event.name,
        ),
        whatsapp: format!(
            "Apokria Update: {} \u{2014} schedule & sponsor deck live. Check your mail.",
            event.name
        ),
    }
}
