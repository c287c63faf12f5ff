// Calendar export service
// iCalendar serialization and external-calendar deep links

mod export;
mod service;
mod utils;

pub use service::ExportService;

/// Optional filters applied before serializing a range
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportFilters {
    pub venue_id: Option<String>,
    pub event_type_id: Option<String>,
}
