// Settings module
// User-adjustable calendar display settings merged with system defaults

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_START_TIME: &str = "08:00";
pub const DEFAULT_END_TIME: &str = "22:00";
pub const DEFAULT_REMINDER_LEAD_HOURS: u32 = 24;
pub const MIN_REMINDER_LEAD_HOURS: u32 = 1;
pub const MAX_REMINDER_LEAD_HOURS: u32 = 168;

/// Calendar view granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Month,
    Week,
    Day,
}

/// Clock format used for event time labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Reminder preferences, delivered by the booking service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_reminders: bool,
    pub reminder_lead_hours: u32,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_reminders: false,
            reminder_lead_hours: DEFAULT_REMINDER_LEAD_HOURS,
        }
    }
}

/// Effective calendar settings consumed by the view-model components.
///
/// Always fully populated; absent server fields are substituted with the
/// defaults below at resolution time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarSettings {
    pub default_view: ViewMode,
    pub time_format: TimeFormat,
    /// Business-day start, "HH:MM"
    pub start_time: String,
    /// Business-day end, "HH:MM"; must be later than `start_time`
    pub end_time: String,
    pub show_weekends: bool,
    /// Display color per event status, hex strings keyed by status name
    pub event_colors: HashMap<String, String>,
    pub notifications: NotificationSettings,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            default_view: ViewMode::Month,
            time_format: TimeFormat::TwelveHour,
            start_time: DEFAULT_START_TIME.to_string(),
            end_time: DEFAULT_END_TIME.to_string(),
            show_weekends: true,
            event_colors: HashMap::new(),
            notifications: NotificationSettings::default(),
        }
    }
}

impl CalendarSettings {
    pub fn validate(&self) -> Result<(), String> {
        let start = parse_hour(&self.start_time)
            .ok_or_else(|| format!("Invalid start time: {}", self.start_time))?;
        let end = parse_hour(&self.end_time)
            .ok_or_else(|| format!("Invalid end time: {}", self.end_time))?;
        if start >= end {
            return Err("Working-day start must be before end".to_string());
        }
        let lead = self.notifications.reminder_lead_hours;
        if !(MIN_REMINDER_LEAD_HOURS..=MAX_REMINDER_LEAD_HOURS).contains(&lead) {
            return Err(format!(
                "Reminder lead hours must be between {} and {}",
                MIN_REMINDER_LEAD_HOURS, MAX_REMINDER_LEAD_HOURS
            ));
        }
        Ok(())
    }
}

/// Partial settings as sent by the settings endpoint or a local edit.
/// Every field optional; `None` means "leave as is" on merge and
/// "use the default" on first resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialCalendarSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view: Option<ViewMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_format: Option<TimeFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_weekends: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_colors: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationSettings>,
}

impl From<&CalendarSettings> for PartialCalendarSettings {
    fn from(settings: &CalendarSettings) -> Self {
        Self {
            default_view: Some(settings.default_view),
            time_format: Some(settings.time_format),
            start_time: Some(settings.start_time.clone()),
            end_time: Some(settings.end_time.clone()),
            show_weekends: Some(settings.show_weekends),
            event_colors: Some(settings.event_colors.clone()),
            notifications: Some(settings.notifications.clone()),
        }
    }
}

/// Parse an "HH:MM" working-hour string into the hour component.
/// Returns `None` for anything malformed rather than failing.
pub fn parse_hour(value: &str) -> Option<u32> {
    let (hour, minute) = value.split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(hour)
}
