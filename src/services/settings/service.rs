use crate::models::settings::{CalendarSettings, PartialCalendarSettings};

use super::mapper::{merge_partial, resolve_partial};

/// Fallback display colors per event status
pub const COLOR_CONFIRMED: &str = "#10B981";
pub const COLOR_PENDING: &str = "#F59E0B";
pub const COLOR_CANCELLED: &str = "#EF4444";
pub const COLOR_COMPLETED: &str = "#8B5CF6";
/// Neutral color for unrecognized statuses
pub const COLOR_NEUTRAL: &str = "#3B82F6";

/// Holds the last-resolved effective settings.
///
/// This is the only stateful piece of the view-model: the cached copy
/// is what local edits merge against while the service round-trip is
/// in flight. Everything else in the crate is a pure function.
pub struct SettingsResolver {
    current: CalendarSettings,
}

impl SettingsResolver {
    /// Start from the documented defaults, before any server fetch.
    pub fn new() -> Self {
        Self {
            current: CalendarSettings::default(),
        }
    }

    /// Replace the cached settings with a fresh resolution of the
    /// server payload (or the defaults when the hotel has none).
    pub fn resolve(&mut self, server: Option<PartialCalendarSettings>) -> &CalendarSettings {
        self.current = resolve_partial(server);
        &self.current
    }

    /// Apply a local edit on top of the cached effective settings and
    /// return the new value. No validation beyond the settings
    /// invariants happens here; strict callers wrap this.
    pub fn update_local(&mut self, patch: PartialCalendarSettings) -> &CalendarSettings {
        self.current = merge_partial(&self.current, patch);
        &self.current
    }

    pub fn current(&self) -> &CalendarSettings {
        &self.current
    }

    /// Display color for an event status: the user's color map first,
    /// then the fixed per-status fallback, then neutral for statuses
    /// the map has never heard of.
    pub fn color_for_status(&self, status: &str) -> &str {
        if let Some(color) = self.current.event_colors.get(status) {
            return color;
        }
        match status {
            "confirmed" => COLOR_CONFIRMED,
            "pending" => COLOR_PENDING,
            "cancelled" => COLOR_CANCELLED,
            "completed" => COLOR_COMPLETED,
            _ => COLOR_NEUTRAL,
        }
    }
}

impl Default for SettingsResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::settings::ViewMode;

    #[test]
    fn test_new_resolver_holds_defaults() {
        let resolver = SettingsResolver::new();
        assert_eq!(resolver.current(), &CalendarSettings::default());
    }

    #[test]
    fn test_resolve_replaces_cached_copy() {
        let mut resolver = SettingsResolver::new();
        let partial = PartialCalendarSettings {
            default_view: Some(ViewMode::Week),
            ..PartialCalendarSettings::default()
        };

        resolver.resolve(Some(partial));
        assert_eq!(resolver.current().default_view, ViewMode::Week);
    }

    #[test]
    fn test_update_local_merges_against_resolved() {
        let mut resolver = SettingsResolver::new();
        resolver.resolve(Some(PartialCalendarSettings {
            start_time: Some("06:00".to_string()),
            ..PartialCalendarSettings::default()
        }));

        resolver.update_local(PartialCalendarSettings {
            show_weekends: Some(false),
            ..PartialCalendarSettings::default()
        });

        // previous resolution survives the local edit
        assert_eq!(resolver.current().start_time, "06:00");
        assert!(!resolver.current().show_weekends);
    }

    #[test]
    fn test_color_for_status_prefers_user_map() {
        let mut resolver = SettingsResolver::new();
        let mut colors = std::collections::HashMap::new();
        colors.insert("confirmed".to_string(), "#123456".to_string());
        resolver.update_local(PartialCalendarSettings {
            event_colors: Some(colors),
            ..PartialCalendarSettings::default()
        });

        assert_eq!(resolver.color_for_status("confirmed"), "#123456");
        // unmapped statuses fall back to the fixed table
        assert_eq!(resolver.color_for_status("pending"), COLOR_PENDING);
    }

    #[test]
    fn test_color_for_status_fallback_table() {
        let resolver = SettingsResolver::new();
        assert_eq!(resolver.color_for_status("confirmed"), COLOR_CONFIRMED);
        assert_eq!(resolver.color_for_status("pending"), COLOR_PENDING);
        assert_eq!(resolver.color_for_status("cancelled"), COLOR_CANCELLED);
        assert_eq!(resolver.color_for_status("completed"), COLOR_COMPLETED);
    }

    #[test]
    fn test_color_for_unknown_status_is_neutral() {
        let resolver = SettingsResolver::new();
        assert_eq!(resolver.color_for_status("tentative"), COLOR_NEUTRAL);
        assert_eq!(resolver.color_for_status(""), COLOR_NEUTRAL);
    }
}
