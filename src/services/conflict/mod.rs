// Conflict aggregation
// Groups overlapping bookings per venue within a queried day range

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::venue::Venue;
use crate::utils::date::local_midnight;

/// Overlapping bookings at one venue.
///
/// `events` is the union of every event involved in at least one
/// overlap at the venue, ordered by start time.
#[derive(Debug, Clone, PartialEq)]
pub struct ConflictGroup {
    pub venue: Venue,
    pub events: Vec<Event>,
}

impl ConflictGroup {
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}

/// Find per-venue booking conflicts inside the half-open day range
/// [start_day, end_day).
///
/// Two events conflict iff their intervals strictly overlap; events
/// that merely touch boundaries do not. Venues without a conflicting
/// pair are omitted. The pairwise scan is quadratic per venue, which is
/// fine at calendar-window scale (see benches/conflict_bench.rs).
pub fn find_conflicts(
    events: &[Event],
    start_day: NaiveDate,
    end_day: NaiveDate,
    venue_filter: Option<&str>,
) -> Vec<ConflictGroup> {
    let window_start = local_midnight(start_day);
    let window_end = local_midnight(end_day);

    let mut by_venue: HashMap<&str, Vec<&Event>> = HashMap::new();
    for event in events {
        if !event.overlaps_range(window_start, window_end) {
            continue;
        }
        if let Some(venue_id) = venue_filter {
            if event.venue.id != venue_id {
                continue;
            }
        }
        by_venue.entry(event.venue.id.as_str()).or_default().push(event);
    }

    let mut groups: Vec<ConflictGroup> = Vec::new();
    for venue_events in by_venue.into_values() {
        let mut involved = vec![false; venue_events.len()];
        for i in 0..venue_events.len() {
            for j in (i + 1)..venue_events.len() {
                if venue_events[i].overlaps(venue_events[j]) {
                    involved[i] = true;
                    involved[j] = true;
                }
            }
        }

        let mut members: Vec<Event> = venue_events
            .iter()
            .zip(&involved)
            .filter(|(_, involved)| **involved)
            .map(|(event, _)| (*event).clone())
            .collect();

        if members.is_empty() {
            continue;
        }

        // start-time order, id as tie-break so output never depends on
        // input order
        members.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
        groups.push(ConflictGroup {
            venue: members[0].venue.clone(),
            events: members,
        });
    }

    // HashMap iteration order is arbitrary; order groups by venue id
    groups.sort_by(|a, b| a.venue.id.cmp(&b.venue.id));
    groups
}
