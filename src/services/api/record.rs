use anyhow::{anyhow, Result};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::models::event::{Event, EventStatus, EventTypeRef};
use crate::models::venue::Venue;

/// Event as the data service sends it: flat, stringly typed, partially
/// optional. Converted into the domain model by [`EventRecord::into_event`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub status: String,
    pub venue_id: String,
    pub venue_name: String,
    #[serde(default)]
    pub venue_capacity: Option<u32>,
    #[serde(default)]
    pub event_type_id: Option<String>,
    #[serde(default)]
    pub event_type_color: Option<String>,
    #[serde(default)]
    pub staff_count: Option<u32>,
    #[serde(default)]
    pub all_day: Option<bool>,
}

impl EventRecord {
    pub fn into_event(self) -> Result<Event> {
        let start = parse_instant(&self.start)?;
        let end = parse_instant(&self.end)?;
        let status: EventStatus = self.status.parse().map_err(|e: String| anyhow!(e))?;

        let mut builder = Event::builder()
            .id(self.id)
            .title(self.title)
            .start(start)
            .end(end)
            .status(status)
            .venue(Venue::new(
                self.venue_id,
                self.venue_name,
                self.venue_capacity.unwrap_or(0),
            ))
            .staff_count(self.staff_count.unwrap_or(0))
            .all_day(self.all_day.unwrap_or(false));

        if let Some(type_id) = self.event_type_id {
            builder = builder.event_type(EventTypeRef {
                id: type_id,
                color: self.event_type_color,
            });
        }

        builder.build().map_err(|e| anyhow!(e))
    }
}

/// Convert fetched records to domain events, dropping anything
/// malformed. One bad record must not blank the whole calendar, so
/// failures are logged and skipped instead of propagated.
pub fn sanitize_events(records: Vec<EventRecord>) -> Vec<Event> {
    let total = records.len();
    let events: Vec<Event> = records
        .into_iter()
        .filter_map(|record| {
            let id = record.id.clone();
            match record.into_event() {
                Ok(event) => Some(event),
                Err(err) => {
                    log::warn!("Dropping malformed event record {}: {}", id, err);
                    None
                }
            }
        })
        .collect();

    if events.len() < total {
        log::warn!("Dropped {} of {} event records", total - events.len(), total);
    }
    events
}

/// Accepts RFC 3339 timestamps and the service's older
/// "YYYY-MM-DDTHH:MM[:SS]" local form.
fn parse_instant(value: &str) -> Result<DateTime<Local>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Local));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Local
                .from_local_datetime(&naive)
                .single()
                .ok_or_else(|| anyhow!("Ambiguous local datetime: {}", value));
        }
    }

    Err(anyhow!("Invalid datetime format: {}", value))
}
