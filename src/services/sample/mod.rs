// Sample data provider
// Deterministic in-memory fixture data for demos and tests. Only ever
// used where it is injected explicitly; production paths construct an
// EventApiClient instead.

use std::sync::Mutex;

use anyhow::Result;
use chrono::{DateTime, Local, TimeZone};

use crate::models::event::{Event, EventStatus, EventTypeRef};
use crate::models::settings::{CalendarSettings, PartialCalendarSettings};
use crate::models::venue::Venue;
use crate::services::api::{EventDataProvider, EventFilters};
use crate::services::settings::{merge_partial, resolve_partial};

pub struct SampleDataProvider {
    events: Vec<Event>,
    settings: Mutex<Option<PartialCalendarSettings>>,
}

impl SampleDataProvider {
    pub fn new(events: Vec<Event>, settings: Option<PartialCalendarSettings>) -> Self {
        Self {
            events,
            settings: Mutex::new(settings),
        }
    }

    /// Fixed demo dataset: one June 2024 week at three venues,
    /// including a deliberate double-booking of the Grand Ballroom
    /// on the 14th.
    pub fn with_demo_data() -> Self {
        let ballroom = Venue::new("v-ballroom", "Grand Ballroom", 350);
        let terrace = Venue::new("v-terrace", "Terrace", 80);
        let boardroom = Venue::new("v-boardroom", "Boardroom", 24);

        let wedding = EventTypeRef {
            id: "et-wedding".to_string(),
            color: Some("#EC4899".to_string()),
        };
        let conference = EventTypeRef {
            id: "et-conference".to_string(),
            color: None,
        };

        let events = vec![
            demo_event("e-1", "Hartley Wedding", &ballroom, 14, 14, 22)
                .event_type(wedding.clone())
                .status(EventStatus::Confirmed)
                .staff_count(12),
            demo_event("e-2", "Product Launch", &ballroom, 14, 9, 16)
                .event_type(conference.clone())
                .status(EventStatus::Pending)
                .staff_count(8),
            demo_event("e-3", "Summer Tasting Menu", &terrace, 14, 18, 21)
                .status(EventStatus::Confirmed)
                .staff_count(5),
            demo_event("e-4", "Board Offsite", &boardroom, 12, 9, 17)
                .event_type(conference)
                .status(EventStatus::Confirmed)
                .staff_count(2),
            demo_event("e-5", "Anniversary Dinner", &terrace, 15, 19, 22)
                .status(EventStatus::Pending)
                .staff_count(4),
            demo_event("e-6", "Charity Gala", &ballroom, 21, 17, 23)
                .event_type(wedding)
                .status(EventStatus::Confirmed)
                .staff_count(15),
        ];

        let events = events
            .into_iter()
            .map(|builder| builder.build().expect("demo events are well formed"))
            .collect();

        Self::new(events, None)
    }
}

fn demo_event(
    id: &str,
    title: &str,
    venue: &Venue,
    day: u32,
    start_hour: u32,
    end_hour: u32,
) -> crate::models::event::EventBuilder {
    Event::builder()
        .id(id)
        .title(title)
        .start(Local.with_ymd_and_hms(2024, 6, day, start_hour, 0, 0).unwrap())
        .end(Local.with_ymd_and_hms(2024, 6, day, end_hour, 0, 0).unwrap())
        .venue(venue.clone())
}

impl EventDataProvider for SampleDataProvider {
    fn list_events(
        &self,
        _hotel_id: &str,
        window_start: DateTime<Local>,
        window_end: DateTime<Local>,
        filters: &EventFilters,
    ) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.overlaps_range(window_start, window_end))
            .filter(|event| match &filters.venue_id {
                Some(venue_id) => &event.venue.id == venue_id,
                None => true,
            })
            .filter(|event| match &filters.event_type_id {
                Some(type_id) => event
                    .event_type
                    .as_ref()
                    .is_some_and(|et| &et.id == type_id),
                None => true,
            })
            .filter(|event| match filters.status {
                Some(status) => event.status == status,
                None => true,
            })
            .cloned()
            .collect())
    }

    fn list_venue_bookings(
        &self,
        venue_id: &str,
        window_start: DateTime<Local>,
        window_end: DateTime<Local>,
    ) -> Result<Vec<Event>> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.venue.id == venue_id)
            .filter(|event| event.overlaps_range(window_start, window_end))
            .cloned()
            .collect())
    }

    fn get_calendar_settings(&self, _hotel_id: &str) -> Result<Option<PartialCalendarSettings>> {
        Ok(self.settings.lock().expect("settings lock poisoned").clone())
    }

    fn update_calendar_settings(
        &self,
        _hotel_id: &str,
        patch: &PartialCalendarSettings,
    ) -> Result<CalendarSettings> {
        let mut stored = self.settings.lock().expect("settings lock poisoned");
        let effective = match stored.take() {
            Some(existing) => merge_partial(&resolve_partial(Some(existing)), patch.clone()),
            None => merge_partial(&CalendarSettings::default(), patch.clone()),
        };
        *stored = Some(PartialCalendarSettings::from(&effective));
        Ok(effective)
    }
}
