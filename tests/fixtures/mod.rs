// Test fixtures - reusable test data
// Provides consistent venues and events across integration tests

use chrono::{DateTime, Local, NaiveDate, TimeZone};

use venue_calendar::models::event::{Event, EventStatus};
use venue_calendar::models::venue::Venue;

pub fn ballroom() -> Venue {
    Venue::new("v-ballroom", "Grand Ballroom", 350)
}

pub fn terrace() -> Venue {
    Venue::new("v-terrace", "Terrace", 80)
}

pub fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).expect("valid June 2024 date")
}

pub fn june_instant(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 6, day, hour, minute, 0)
        .unwrap()
}

/// An event on one June 2024 day, hours given as (start, end)
pub fn event(id: &str, venue: Venue, day: u32, start_hour: u32, end_hour: u32) -> Event {
    Event::builder()
        .id(id)
        .title(format!("Event {}", id))
        .start(june_instant(day, start_hour, 0))
        .end(june_instant(day, end_hour, 0))
        .status(EventStatus::Confirmed)
        .venue(venue)
        .build()
        .expect("fixture events are well formed")
}
