// Event module
// Venue event model as returned by the event data service

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::models::venue::Venue;

/// Booking status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Confirmed,
    Pending,
    Cancelled,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Confirmed => "confirmed",
            EventStatus::Pending => "pending",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(EventStatus::Confirmed),
            "pending" => Ok(EventStatus::Pending),
            "cancelled" => Ok(EventStatus::Cancelled),
            "completed" => Ok(EventStatus::Completed),
            other => Err(format!("Unknown event status: {}", other)),
        }
    }
}

/// Reference to the event type an event was created from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTypeRef {
    pub id: String,
    pub color: Option<String>,
}

/// A scheduled venue event
///
/// Immutable once fetched; the event list is replaced wholesale on
/// refetch, so instances never mutate in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub status: EventStatus,
    pub venue: Venue,
    pub event_type: Option<EventTypeRef>,
    pub staff_count: u32,
    pub all_day: bool,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Service-assigned identifier
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time (must be after start)
    /// * `venue` - Venue the event is booked at
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
        venue: Venue,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            status: EventStatus::Pending,
            venue,
            event_type: None,
            staff_count: 0,
            all_day: false,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }
        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }
        self.venue.validate()?;
        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Strict interval overlap with another event.
    /// Touching boundaries (this ends exactly when other starts) do not count.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Strict interval overlap with an arbitrary [start, end) range.
    pub fn overlaps_range(&self, start: DateTime<Local>, end: DateTime<Local>) -> bool {
        self.start < end && start < self.end
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<DateTime<Local>>,
    end: Option<DateTime<Local>>,
    status: EventStatus,
    venue: Option<Venue>,
    event_type: Option<EventTypeRef>,
    staff_count: u32,
    all_day: bool,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            title: None,
            start: None,
            end: None,
            status: EventStatus::Pending,
            venue: None,
            event_type: None,
            staff_count: 0,
            all_day: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: DateTime<Local>) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: DateTime<Local>) -> Self {
        self.end = Some(end);
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn venue(mut self, venue: Venue) -> Self {
        self.venue = Some(venue);
        self
    }

    pub fn event_type(mut self, event_type: EventTypeRef) -> Self {
        self.event_type = Some(event_type);
        self
    }

    pub fn staff_count(mut self, staff_count: u32) -> Self {
        self.staff_count = staff_count;
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let id = self.id.ok_or("Event id is required")?;
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;
        let venue = self.venue.ok_or("Event venue is required")?;

        let event = Event {
            id,
            title,
            start,
            end,
            status: self.status,
            venue,
            event_type: self.event_type,
            staff_count: self.staff_count,
            all_day: self.all_day,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample_venue() -> Venue {
        Venue::new("v-1", "Grand Ballroom", 350)
    }

    fn sample_start() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    fn sample_end() -> DateTime<Local> {
        sample_start() + Duration::hours(2)
    }

    #[test]
    fn test_new_event_success() {
        let result = Event::new("e-1", "Summer Gala", sample_start(), sample_end(), sample_venue());

        assert!(result.is_ok());
        let event = result.unwrap();
        assert_eq!(event.title, "Summer Gala");
        assert_eq!(event.status, EventStatus::Pending);
        assert_eq!(event.venue.name, "Grand Ballroom");
        assert!(!event.all_day);
    }

    #[test]
    fn test_new_event_empty_title() {
        let result = Event::new("e-1", "", sample_start(), sample_end(), sample_venue());
        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event title cannot be empty");
    }

    #[test]
    fn test_new_event_invalid_times() {
        let start = sample_start();
        let end = start - Duration::hours(1);
        let result = Event::new("e-1", "Summer Gala", start, end, sample_venue());

        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err(),
            "Event end time must be after start time"
        );
    }

    #[test]
    fn test_new_event_equal_times() {
        let start = sample_start();
        let result = Event::new("e-1", "Summer Gala", start, start, sample_venue());
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_with_optional_fields() {
        let event = Event::builder()
            .id("e-42")
            .title("Wine Tasting")
            .start(sample_start())
            .end(sample_end())
            .status(EventStatus::Confirmed)
            .venue(sample_venue())
            .event_type(EventTypeRef {
                id: "et-dinner".to_string(),
                color: Some("#8B5CF6".to_string()),
            })
            .staff_count(6)
            .build()
            .unwrap();

        assert_eq!(event.id, "e-42");
        assert_eq!(event.status, EventStatus::Confirmed);
        assert_eq!(event.staff_count, 6);
        assert_eq!(event.event_type.unwrap().id, "et-dinner");
    }

    #[test]
    fn test_builder_missing_venue() {
        let result = Event::builder()
            .id("e-1")
            .title("Summer Gala")
            .start(sample_start())
            .end(sample_end())
            .build();

        assert!(result.is_err());
        assert_eq!(result.unwrap_err(), "Event venue is required");
    }

    #[test]
    fn test_duration() {
        let event =
            Event::new("e-1", "Summer Gala", sample_start(), sample_end(), sample_venue()).unwrap();
        assert_eq!(event.duration(), Duration::hours(2));
    }

    #[test]
    fn test_overlaps_strict() {
        let venue = sample_venue();
        let a = Event::new(
            "a",
            "Setup",
            Local.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap(),
            Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            venue.clone(),
        )
        .unwrap();
        let b = Event::new(
            "b",
            "Lunch Service",
            Local.with_ymd_and_hms(2024, 6, 1, 11, 0, 0).unwrap(),
            Local.with_ymd_and_hms(2024, 6, 1, 13, 0, 0).unwrap(),
            venue.clone(),
        )
        .unwrap();
        let c = Event::new(
            "c",
            "Dinner Service",
            Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            Local.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap(),
            venue,
        )
        .unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // back-to-back is not an overlap
        assert!(!a.overlaps(&c));
        assert!(!c.overlaps(&a));
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            EventStatus::Confirmed,
            EventStatus::Pending,
            EventStatus::Cancelled,
            EventStatus::Completed,
        ] {
            assert_eq!(status.as_str().parse::<EventStatus>().unwrap(), status);
        }
        assert!("tentative".parse::<EventStatus>().is_err());
    }
}
