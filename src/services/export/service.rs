use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::local_midnight;

use super::export;
use super::utils::{format_date, format_datetime};
use super::ExportFilters;

const GOOGLE_CALENDAR_BASE: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

/// Service for exporting event ranges as iCalendar documents and
/// building external-calendar deep links
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the events falling inside [start_day, end_day) that
    /// pass the filters. An empty selection still produces a valid,
    /// empty calendar document.
    pub fn export_range(
        &self,
        events: &[Event],
        start_day: NaiveDate,
        end_day: NaiveDate,
        filters: &ExportFilters,
    ) -> Result<String> {
        let selected = filter_for_export(events, start_day, end_day, filters);
        log::debug!(
            "Exporting {} of {} events for {} - {}",
            selected.len(),
            events.len(),
            start_day,
            end_day
        );
        export::document(&selected)
    }

    /// Export a range to a .ics file on disk
    pub fn export_range_to_file(
        &self,
        events: &[Event],
        start_day: NaiveDate,
        end_day: NaiveDate,
        filters: &ExportFilters,
        path: &Path,
    ) -> Result<()> {
        let content = self.export_range(events, start_day, end_day, filters)?;
        fs::write(path, content).context(format!("Failed to write .ics file: {:?}", path))?;
        Ok(())
    }

    /// Deep link that pre-fills the event in Google Calendar. Never
    /// opens the link itself; the caller decides whether to navigate.
    pub fn google_calendar_url(&self, event: &Event) -> String {
        let dates = if event.all_day {
            format!("{}/{}", format_date(&event.start), format_date(&event.end))
        } else {
            format!(
                "{}/{}",
                format_datetime(&event.start),
                format_datetime(&event.end)
            )
        };

        format!(
            "{}&text={}&dates={}&location={}",
            GOOGLE_CALENDAR_BASE,
            urlencoding::encode(&event.title),
            dates,
            urlencoding::encode(&event.venue.name),
        )
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

/// Window-intersection plus venue/event-type filtering, the same
/// semantics the conflict scan uses for its window.
fn filter_for_export<'a>(
    events: &'a [Event],
    start_day: NaiveDate,
    end_day: NaiveDate,
    filters: &ExportFilters,
) -> Vec<&'a Event> {
    let window_start = local_midnight(start_day);
    let window_end = local_midnight(end_day);

    events
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
        .collect()
}
