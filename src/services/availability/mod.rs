// Venue availability checks
// Pure function of a proposed interval against existing bookings

use chrono::{DateTime, Local};

use crate::models::event::Event;

/// Outcome of an availability query. Recomputed per query, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResult {
    pub is_available: bool,
    pub reason: Option<String>,
}

impl AvailabilityResult {
    fn available() -> Self {
        Self {
            is_available: true,
            reason: None,
        }
    }

    fn unavailable(reason: String) -> Self {
        Self {
            is_available: false,
            reason: Some(reason),
        }
    }
}

/// Check whether `venue_id` is free for the half-open interval
/// [start, end).
///
/// The venue is unavailable iff an existing booking for it strictly
/// overlaps the proposed interval; a booking ending exactly at `start`
/// does not block. The caller supplies current bookings; this function
/// performs no I/O and identical inputs always produce identical output.
pub fn check_availability(
    venue_id: &str,
    start: DateTime<Local>,
    end: DateTime<Local>,
    existing: &[Event],
) -> AvailabilityResult {
    let conflict = existing
        .iter()
        .find(|booking| booking.venue.id == venue_id && booking.overlaps_range(start, end));

    match conflict {
        None => AvailabilityResult::available(),
        Some(booking) => AvailabilityResult::unavailable(format!(
            "Conflicts with \"{}\" ({} to {})",
            booking.title,
            booking.start.format("%Y-%m-%d %H:%M"),
            booking.end.format("%Y-%m-%d %H:%M"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventStatus;
    use crate::models::venue::Venue;
    use chrono::TimeZone;

    fn booking(id: &str, venue_id: &str, start_hour: u32, end_hour: u32) -> Event {
        Event::builder()
            .id(id)
            .title(format!("Booking {}", id))
            .start(Local.with_ymd_and_hms(2024, 6, 1, start_hour, 0, 0).unwrap())
            .end(Local.with_ymd_and_hms(2024, 6, 1, end_hour, 0, 0).unwrap())
            .status(EventStatus::Confirmed)
            .venue(Venue::new(venue_id, "Terrace", 80))
            .build()
            .unwrap()
    }

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_available_when_no_bookings() {
        let result = check_availability("V1", at(10), at(12), &[]);
        assert!(result.is_available);
        assert!(result.reason.is_none());
    }

    #[test]
    fn test_unavailable_on_overlap() {
        let existing = vec![booking("B1", "V1", 11, 13)];
        let result = check_availability("V1", at(10), at(12), &existing);

        assert!(!result.is_available);
        let reason = result.reason.unwrap();
        assert!(reason.contains("Booking B1"));
        assert!(reason.contains("11:00"));
    }

    #[test]
    fn test_touching_boundary_is_available() {
        // existing booking ends at 12:00, proposal starts at 12:00
        let existing = vec![booking("B1", "V1", 10, 12)];
        let result = check_availability("V1", at(12), at(14), &existing);
        assert!(result.is_available);
    }

    #[test]
    fn test_other_venue_bookings_ignored() {
        let existing = vec![booking("B1", "V2", 10, 12)];
        let result = check_availability("V1", at(10), at(12), &existing);
        assert!(result.is_available);
    }

    #[test]
    fn test_contained_interval_blocks() {
        let existing = vec![booking("B1", "V1", 9, 17)];
        let result = check_availability("V1", at(10), at(11), &existing);
        assert!(!result.is_available);
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let existing = vec![booking("B1", "V1", 11, 13)];
        let first = check_availability("V1", at(10), at(12), &existing);
        let second = check_availability("V1", at(10), at(12), &existing);
        assert_eq!(first, second);
    }
}
