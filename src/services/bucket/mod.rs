// Event bucketing
// Assigns fetched events to the day and hour cells of the render window

use chrono::{NaiveDate, Timelike};

use crate::models::event::Event;

/// Maximum events shown inside a month-grid day cell before the
/// "+N more" indicator takes over. Presentation policy only; the
/// bucketing functions always return the full matching set.
pub const DAY_CELL_EVENT_LIMIT: usize = 3;

/// Events belonging to `day`.
///
/// An event belongs to a day iff its start falls on that calendar date.
/// Multi-day events appear only on their start day in the month and
/// week grids.
pub fn events_for_day(events: &[Event], day: NaiveDate) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.start.date_naive() == day)
        .collect()
}

/// Events occupying the `(day, hour)` slot of a time-grid view.
///
/// An event occupies the slot iff it starts on `day` with
/// start-hour <= hour < end-hour. The upper bound is strict, so an
/// event ending exactly on an hour boundary does not occupy that hour.
pub fn events_for_hour(events: &[Event], day: NaiveDate, hour: u32) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| {
            event.start.date_naive() == day
                && event.start.hour() <= hour
                && hour < event.end.hour()
        })
        .collect()
}

/// Split a day bucket into the events a month cell renders and the
/// count hidden behind the "+N more" indicator.
pub fn day_cell_preview<'a>(day_events: &'a [&'a Event]) -> (&'a [&'a Event], usize) {
    let visible = day_events.len().min(DAY_CELL_EVENT_LIMIT);
    (&day_events[..visible], day_events.len() - visible)
}
