// Presentation decoration
// Derived display fields for an event; keeps rendering concerns out of
// the domain model

use chrono::{DateTime, Local};

use crate::models::event::Event;
use crate::models::settings::{CalendarSettings, TimeFormat};
use crate::services::settings::SettingsResolver;

/// Presentation-only view of an event, computed per render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDisplay {
    pub event_id: String,
    pub title: String,
    pub background_color: String,
    pub time_label: String,
    pub venue_name: String,
}

/// Decorate a domain event for rendering. The background color comes
/// from the event type when it carries one, otherwise from the
/// settings color map via the resolver.
pub fn decorate(event: &Event, resolver: &SettingsResolver) -> EventDisplay {
    let background_color = event
        .event_type
        .as_ref()
        .and_then(|et| et.color.clone())
        .unwrap_or_else(|| resolver.color_for_status(event.status.as_str()).to_string());

    EventDisplay {
        event_id: event.id.clone(),
        title: event.title.clone(),
        background_color,
        time_label: format_time_range(event, resolver.current()),
        venue_name: event.venue.name.clone(),
    }
}

/// Format a single instant according to the time-format setting.
pub fn format_time(instant: DateTime<Local>, format: TimeFormat) -> String {
    match format {
        TimeFormat::TwelveHour => instant.format("%-I:%M %p").to_string(),
        TimeFormat::TwentyFourHour => instant.format("%H:%M").to_string(),
    }
}

/// "10:00 AM - 12:00 PM" style label, or "All day" for all-day events.
pub fn format_time_range(event: &Event, settings: &CalendarSettings) -> String {
    if event.all_day {
        return "All day".to_string();
    }
    format!(
        "{} - {}",
        format_time(event.start, settings.time_format),
        format_time(event.end, settings.time_format)
    )
}
