use anyhow::Result;
use chrono::Local;

use crate::models::event::{Event, EventStatus};

use super::utils::{escape_text, format_date, format_datetime};

pub(super) fn document(events: &[&Event]) -> Result<String> {
    let mut ics = calendar_header();
    for event in events {
        append_event(&mut ics, event);
    }
    ics.push_str("END:VCALENDAR\r\n");
    Ok(ics)
}

fn calendar_header() -> String {
    let mut ics = String::new();
    ics.push_str("BEGIN:VCALENDAR\r\n");
    ics.push_str("VERSION:2.0\r\n");
    ics.push_str("PRODID:-//Venue Calendar//EN\r\n");
    ics.push_str("CALSCALE:GREGORIAN\r\n");
    ics
}

fn append_event(buffer: &mut String, event: &Event) {
    buffer.push_str("BEGIN:VEVENT\r\n");
    buffer.push_str(&format!("UID:venue-calendar-{}\r\n", event.id));
    buffer.push_str(&format!("DTSTAMP:{}\r\n", format_datetime(&Local::now())));

    if event.all_day {
        buffer.push_str(&format!(
            "DTSTART;VALUE=DATE:{}\r\n",
            format_date(&event.start)
        ));
        buffer.push_str(&format!("DTEND;VALUE=DATE:{}\r\n", format_date(&event.end)));
    } else {
        buffer.push_str(&format!("DTSTART:{}\r\n", format_datetime(&event.start)));
        buffer.push_str(&format!("DTEND:{}\r\n", format_datetime(&event.end)));
    }

    buffer.push_str(&format!("SUMMARY:{}\r\n", escape_text(&event.title)));
    buffer.push_str(&format!("LOCATION:{}\r\n", escape_text(&event.venue.name)));
    buffer.push_str(&format!("STATUS:{}\r\n", ical_status(event.status)));

    if let Some(event_type) = &event.event_type {
        buffer.push_str(&format!("CATEGORIES:{}\r\n", escape_text(&event_type.id)));
    }
    if event.staff_count > 0 {
        buffer.push_str(&format!("X-STAFF-COUNT:{}\r\n", event.staff_count));
    }

    buffer.push_str("END:VEVENT\r\n");
}

// VEVENT status has no "completed"; a finished event stays CONFIRMED.
fn ical_status(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Confirmed | EventStatus::Completed => "CONFIRMED",
        EventStatus::Pending => "TENTATIVE",
        EventStatus::Cancelled => "CANCELLED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::venue::Venue;
    use chrono::{Duration, TimeZone};

    fn sample_event() -> Event {
        let start = Local.with_ymd_and_hms(2024, 6, 1, 14, 0, 0).unwrap();
        Event::builder()
            .id("e-7")
            .title("Wine Tasting; Reds, Whites")
            .start(start)
            .end(start + Duration::hours(2))
            .status(EventStatus::Pending)
            .venue(Venue::new("v-2", "Terrace", 80))
            .staff_count(4)
            .build()
            .unwrap()
    }

    #[test]
    fn test_document_structure() {
        let event = sample_event();
        let ics = document(&[&event]).unwrap();

        assert!(ics.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
        assert!(ics.contains("PRODID:-//Venue Calendar//EN"));
        assert!(ics.contains("UID:venue-calendar-e-7"));
        assert!(ics.contains("DTSTART:20240601T140000"));
        assert!(ics.contains("DTEND:20240601T160000"));
        assert!(ics.contains("LOCATION:Terrace"));
        assert!(ics.contains("STATUS:TENTATIVE"));
        assert!(ics.contains("X-STAFF-COUNT:4"));
    }

    #[test]
    fn test_summary_is_escaped() {
        let event = sample_event();
        let ics = document(&[&event]).unwrap();
        assert!(ics.contains("SUMMARY:Wine Tasting\\; Reds\\, Whites"));
    }

    #[test]
    fn test_empty_document_is_valid() {
        let ics = document(&[]).unwrap();
        assert!(ics.contains("BEGIN:VCALENDAR"));
        assert!(ics.contains("END:VCALENDAR"));
        assert!(!ics.contains("BEGIN:VEVENT"));
    }

    #[test]
    fn test_all_day_uses_date_values() {
        let mut event = sample_event();
        event.all_day = true;
        let ics = document(&[&event]).unwrap();
        assert!(ics.contains("DTSTART;VALUE=DATE:20240601"));
        assert!(ics.contains("DTEND;VALUE=DATE:20240601"));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ical_status(EventStatus::Confirmed), "CONFIRMED");
        assert_eq!(ical_status(EventStatus::Completed), "CONFIRMED");
        assert_eq!(ical_status(EventStatus::Pending), "TENTATIVE");
        assert_eq!(ical_status(EventStatus::Cancelled), "CANCELLED");
    }
}
