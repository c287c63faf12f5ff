// Venue Calendar demo
// Walks the view-model over the bundled sample data and prints the result

use chrono::NaiveDate;

use venue_calendar::models::settings::ViewMode;
use venue_calendar::services::api::{EventDataProvider, EventFilters};
use venue_calendar::services::availability::check_availability;
use venue_calendar::services::bucket::{day_cell_preview, events_for_day};
use venue_calendar::services::conflict::find_conflicts;
use venue_calendar::services::display::format_time_range;
use venue_calendar::services::sample::SampleDataProvider;
use venue_calendar::services::settings::SettingsResolver;
use venue_calendar::services::window::compute_window;
use venue_calendar::utils::date::local_midnight;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("Starting venue calendar demo");

    let provider = SampleDataProvider::with_demo_data();
    let mut resolver = SettingsResolver::new();
    resolver.resolve(provider.get_calendar_settings("demo-hotel")?);

    let reference = NaiveDate::from_ymd_opt(2024, 6, 14).expect("valid demo date");
    let window = compute_window(reference, ViewMode::Month, resolver.current());

    let events = provider.list_events(
        "demo-hotel",
        local_midnight(window.start),
        local_midnight(window.end),
        &EventFilters::default(),
    )?;

    println!("June 2024 ({} day grid, {} events)\n", window.num_days(), events.len());

    for day in window.days() {
        let bucket = events_for_day(&events, day);
        if bucket.is_empty() {
            continue;
        }
        let (visible, hidden) = day_cell_preview(&bucket);
        println!("{}", day.format("%A, %B %-d"));
        for &event in visible {
            println!(
                "  {:<20} {:<15} {}",
                event.title,
                event.venue.name,
                format_time_range(event, resolver.current())
            );
        }
        if hidden > 0 {
            println!("  +{} more", hidden);
        }
    }

    let conflicts = find_conflicts(&events, window.start, window.end, None);
    println!("\nConflicts: {}", conflicts.len());
    for group in &conflicts {
        println!("  {} ({} overlapping events)", group.venue.name, group.event_count());
        for event in &group.events {
            println!("    {} {}", event.title, format_time_range(event, resolver.current()));
        }
    }

    let bookings = provider.list_venue_bookings(
        "v-ballroom",
        local_midnight(window.start),
        local_midnight(window.end),
    )?;
    let proposed_start = local_midnight(reference) + chrono::Duration::hours(10);
    let proposed_end = proposed_start + chrono::Duration::hours(2);
    let availability =
        check_availability("v-ballroom", proposed_start, proposed_end, &bookings);

    println!(
        "\nGrand Ballroom on {} 10:00-12:00: {}",
        reference,
        if availability.is_available {
            "available".to_string()
        } else {
            availability.reason.unwrap_or_default()
        }
    );

    Ok(())
}
