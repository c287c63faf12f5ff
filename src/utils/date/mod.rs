// Date utility functions

use chrono::{DateTime, Datelike, Duration, Local, LocalResult, NaiveDate, TimeZone};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Local midnight at the start of `date`. Falls back to the earliest
/// valid instant when a DST transition removes or duplicates midnight.
pub fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_hms_opt(0, 0, 0).expect("midnight is always valid");
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => Local.from_utc_datetime(&naive),
    }
}

/// First day of the week containing `date`. Weeks start on Sunday.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), chrono::Weekday::Sat | chrono::Weekday::Sun)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next =
        NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid next month");
    first_of_next.pred_opt().expect("previous day exists").day()
}

/// Shift `current` by `delta_months` whole months, clamping the
/// day-of-month when the target month is shorter.
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let max_day = days_in_month(new_year, new_month);
    let day = current.day().min(max_day);
    NaiveDate::from_ymd_opt(new_year, new_month, day).expect("valid calendar date")
}
