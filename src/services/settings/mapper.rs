use crate::models::settings::{
    parse_hour, CalendarSettings, PartialCalendarSettings, DEFAULT_END_TIME,
    DEFAULT_REMINDER_LEAD_HOURS, DEFAULT_START_TIME, MAX_REMINDER_LEAD_HOURS,
    MIN_REMINDER_LEAD_HOURS,
};

/// Resolve server-provided settings into the effective settings object.
/// Every absent field takes its documented default; invariant-breaking
/// values are corrected rather than rejected so the calendar always
/// stays renderable.
pub fn resolve_partial(server: Option<PartialCalendarSettings>) -> CalendarSettings {
    let resolved = match server {
        None => CalendarSettings::default(),
        Some(partial) => merge_partial(&CalendarSettings::default(), partial),
    };
    normalize(resolved)
}

/// Shallow merge of a patch over the current effective settings.
/// `None` fields keep their current value; the notification sub-object
/// is replaced as a whole.
pub fn merge_partial(
    current: &CalendarSettings,
    patch: PartialCalendarSettings,
) -> CalendarSettings {
    CalendarSettings {
        default_view: patch.default_view.unwrap_or(current.default_view),
        time_format: patch.time_format.unwrap_or(current.time_format),
        start_time: patch.start_time.unwrap_or_else(|| current.start_time.clone()),
        end_time: patch.end_time.unwrap_or_else(|| current.end_time.clone()),
        show_weekends: patch.show_weekends.unwrap_or(current.show_weekends),
        event_colors: patch
            .event_colors
            .unwrap_or_else(|| current.event_colors.clone()),
        notifications: patch
            .notifications
            .unwrap_or_else(|| current.notifications.clone()),
    }
}

/// Enforce the settings invariants: working-day start before end, and
/// reminder lead hours within [1, 168]. Violations fall back to the
/// defaults with a warning.
fn normalize(mut settings: CalendarSettings) -> CalendarSettings {
    let hours_valid = matches!(
        (parse_hour(&settings.start_time), parse_hour(&settings.end_time)),
        (Some(start), Some(end)) if start < end
    );
    if !hours_valid {
        log::warn!(
            "Invalid working hours ({} - {}), falling back to defaults",
            settings.start_time,
            settings.end_time
        );
        settings.start_time = DEFAULT_START_TIME.to_string();
        settings.end_time = DEFAULT_END_TIME.to_string();
    }

    let lead = settings.notifications.reminder_lead_hours;
    if !(MIN_REMINDER_LEAD_HOURS..=MAX_REMINDER_LEAD_HOURS).contains(&lead) {
        log::warn!(
            "Reminder lead of {}h outside [{}, {}], falling back to {}h",
            lead,
            MIN_REMINDER_LEAD_HOURS,
            MAX_REMINDER_LEAD_HOURS,
            DEFAULT_REMINDER_LEAD_HOURS
        );
        settings.notifications.reminder_lead_hours = DEFAULT_REMINDER_LEAD_HOURS;
    }

    settings
}
