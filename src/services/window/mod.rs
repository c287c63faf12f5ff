// Time window calculation
// Turns a reference date plus view mode into the day/hour range to render

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::settings::{parse_hour, CalendarSettings, ViewMode};
use crate::utils::date::{days_in_month, is_weekend, shift_month_preserving_day, week_start};

/// Working-hour fallbacks used when settings carry malformed times
pub const DEFAULT_START_HOUR: u32 = 8;
pub const DEFAULT_END_HOUR: u32 = 22;

/// The day/hour range currently rendered by the calendar.
///
/// `start`..`end` is a half-open day range; `hours` is the inclusive
/// list of hour slots shown by the time-grid views, empty in month mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub hours: Vec<u32>,
}

impl TimeWindow {
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take(self.num_days().max(0) as usize)
    }

    pub fn contains_day(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// Days the grid actually renders: the full range, minus weekends
    /// when the settings hide them.
    pub fn visible_days(&self, settings: &CalendarSettings) -> Vec<NaiveDate> {
        self.days()
            .filter(|day| settings.show_weekends || !is_weekend(*day))
            .collect()
    }
}

/// Compute the render window for `reference` in the given view mode.
///
/// Month mode always spans whole weeks: the grid runs from the Sunday on
/// or before the 1st through the Saturday on or after the month's last
/// day. Malformed working hours in `settings` degrade to the 08:00-22:00
/// defaults; this function never fails.
pub fn compute_window(
    reference: NaiveDate,
    view: ViewMode,
    settings: &CalendarSettings,
) -> TimeWindow {
    match view {
        ViewMode::Month => {
            let first_of_month = reference.with_day(1).expect("day 1 is always valid");
            let last_of_month = reference
                .with_day(days_in_month(reference.year(), reference.month()))
                .expect("last day of month is valid");
            let start = week_start(first_of_month);
            let end = week_start(last_of_month) + Duration::days(7);
            TimeWindow {
                start,
                end,
                hours: Vec::new(),
            }
        }
        ViewMode::Week => {
            let start = week_start(reference);
            TimeWindow {
                start,
                end: start + Duration::days(7),
                hours: hour_slots(settings),
            }
        }
        ViewMode::Day => TimeWindow {
            start: reference,
            end: reference + Duration::days(1),
            hours: hour_slots(settings),
        },
    }
}

/// Hour slots for the time-grid views, inclusive of both working-hour
/// bounds. Falls back to the defaults when either bound fails to parse
/// or the range is inverted.
fn hour_slots(settings: &CalendarSettings) -> Vec<u32> {
    let (start, end) = working_hours(settings);
    (start..=end).collect()
}

pub fn working_hours(settings: &CalendarSettings) -> (u32, u32) {
    let start = parse_hour(&settings.start_time);
    let end = parse_hour(&settings.end_time);
    match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => {
            log::warn!(
                "Malformed working hours ({} - {}), using defaults",
                settings.start_time,
                settings.end_time
            );
            (DEFAULT_START_HOUR, DEFAULT_END_HOUR)
        }
    }
}

/// Step the reference date back by one unit of the current view.
pub fn previous(reference: NaiveDate, view: ViewMode) -> NaiveDate {
    match view {
        ViewMode::Day => reference - Duration::days(1),
        ViewMode::Week => reference - Duration::weeks(1),
        ViewMode::Month => shift_month_preserving_day(reference, -1),
    }
}

/// Step the reference date forward by one unit of the current view.
pub fn next(reference: NaiveDate, view: ViewMode) -> NaiveDate {
    match view {
        ViewMode::Day => reference + Duration::days(1),
        ViewMode::Week => reference + Duration::weeks(1),
        ViewMode::Month => shift_month_preserving_day(reference, 1),
    }
}

/// Reset the reference date to the current day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
