// Settings resolution service

mod mapper;
mod service;

pub use mapper::{merge_partial, resolve_partial};
pub use service::{
    SettingsResolver, COLOR_CANCELLED, COLOR_COMPLETED, COLOR_CONFIRMED, COLOR_NEUTRAL,
    COLOR_PENDING,
};
