// Event data service access
// Provider trait, wire records, HTTP client, and the stale-response guard

mod client;
mod record;
mod sequence;

pub use client::EventApiClient;
pub use record::{sanitize_events, EventRecord};
pub use sequence::RequestSequence;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::models::event::{Event, EventStatus};
use crate::models::settings::{CalendarSettings, PartialCalendarSettings};

/// Filters forwarded to the event data service
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilters {
    pub venue_id: Option<String>,
    pub event_type_id: Option<String>,
    pub status: Option<EventStatus>,
}

/// Seam between the view-model and whatever supplies event data: the
/// REST client in production, the sample provider in demos and tests.
#[cfg_attr(test, mockall::automock)]
pub trait EventDataProvider {
    /// Events for a hotel intersecting [window_start, window_end)
    fn list_events(
        &self,
        hotel_id: &str,
        window_start: DateTime<Local>,
        window_end: DateTime<Local>,
        filters: &EventFilters,
    ) -> Result<Vec<Event>>;

    /// Current bookings for one venue inside the window
    fn list_venue_bookings(
        &self,
        venue_id: &str,
        window_start: DateTime<Local>,
        window_end: DateTime<Local>,
    ) -> Result<Vec<Event>>;

    /// Stored calendar settings, `None` when the hotel has never saved any
    fn get_calendar_settings(&self, hotel_id: &str) -> Result<Option<PartialCalendarSettings>>;

    /// Persist a settings patch; returns the service's effective settings
    fn update_calendar_settings(
        &self,
        hotel_id: &str,
        patch: &PartialCalendarSettings,
    ) -> Result<CalendarSettings>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_provider_seam_accepts_mock() {
        let mut provider = MockEventDataProvider::new();
        provider
            .expect_list_events()
            .withf(|hotel_id, _, _, filters| hotel_id == "h-1" && filters.venue_id.is_none())
            .returning(|_, _, _, _| Ok(Vec::new()));
        provider
            .expect_get_calendar_settings()
            .returning(|_| Ok(None));

        let start = Local.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let end = Local.with_ymd_and_hms(2024, 7, 1, 0, 0, 0).unwrap();

        let events = provider
            .list_events("h-1", start, end, &EventFilters::default())
            .unwrap();
        assert!(events.is_empty());
        assert!(provider.get_calendar_settings("h-1").unwrap().is_none());
    }
}
