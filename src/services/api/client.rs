use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Local, SecondsFormat};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::models::event::Event;
use crate::models::settings::{CalendarSettings, PartialCalendarSettings};

use super::record::{sanitize_events, EventRecord};
use super::{EventDataProvider, EventFilters};

/// Blocking client for the event data service.
pub struct EventApiClient {
    client: Client,
    base_url: String,
    max_retries: usize,
    retry_delay_ms: u64,
}

impl EventApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .context("Failed to build event service HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_retries: 2,
            retry_delay_ms: 400,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut last_error: Option<anyhow::Error> = None;

        for attempt in 0..=self.max_retries {
            match self.get_once(&url, query) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let is_last_attempt = attempt == self.max_retries;
                    if is_last_attempt {
                        last_error = Some(err.context(format!(
                            "Request to {} failed after {} attempts",
                            path,
                            attempt + 1
                        )));
                    } else {
                        log::warn!("Attempt {} failed for {}: {}", attempt + 1, path, err);
                        thread::sleep(Duration::from_millis(self.retry_delay_ms));
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| anyhow!("Unknown event service error")))
    }

    fn get_once<T: DeserializeOwned>(&self, url: &str, query: &[(&str, String)]) -> Result<T> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .context("Network error during event service request")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Event service responded with HTTP {}", status));
        }

        response
            .json::<T>()
            .context("Failed to decode event service response")
    }
}

impl EventDataProvider for EventApiClient {
    fn list_events(
        &self,
        hotel_id: &str,
        window_start: DateTime<Local>,
        window_end: DateTime<Local>,
        filters: &EventFilters,
    ) -> Result<Vec<Event>> {
        let mut query = window_params(window_start, window_end);
        query.extend(filter_params(filters));

        let records: Vec<EventRecord> =
            self.get_json(&format!("/hotels/{}/events", hotel_id), &query)?;
        Ok(sanitize_events(records))
    }

    fn list_venue_bookings(
        &self,
        venue_id: &str,
        window_start: DateTime<Local>,
        window_end: DateTime<Local>,
    ) -> Result<Vec<Event>> {
        let query = window_params(window_start, window_end);
        let records: Vec<EventRecord> =
            self.get_json(&format!("/venues/{}/bookings", venue_id), &query)?;
        Ok(sanitize_events(records))
    }

    fn get_calendar_settings(&self, hotel_id: &str) -> Result<Option<PartialCalendarSettings>> {
        let url = format!("{}/hotels/{}/calendar-settings", self.base_url, hotel_id);
        let response = self
            .client
            .get(&url)
            .send()
            .context("Network error fetching calendar settings")?;

        match response.status() {
            StatusCode::OK => response
                .json::<Option<PartialCalendarSettings>>()
                .context("Failed to decode calendar settings"),
            // a hotel that never saved settings simply has none
            StatusCode::NOT_FOUND => Ok(None),
            status => Err(anyhow!("Settings fetch failed with HTTP {}", status)),
        }
    }

    fn update_calendar_settings(
        &self,
        hotel_id: &str,
        patch: &PartialCalendarSettings,
    ) -> Result<CalendarSettings> {
        let url = format!("{}/hotels/{}/calendar-settings", self.base_url, hotel_id);
        let response = self
            .client
            .put(&url)
            .json(patch)
            .send()
            .context("Network error updating calendar settings")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Settings update failed with HTTP {}", status));
        }

        response
            .json::<CalendarSettings>()
            .context("Failed to decode updated calendar settings")
    }
}

fn window_params(start: DateTime<Local>, end: DateTime<Local>) -> Vec<(&'static str, String)> {
    vec![
        ("from", start.to_rfc3339_opts(SecondsFormat::Secs, true)),
        ("to", end.to_rfc3339_opts(SecondsFormat::Secs, true)),
    ]
}

fn filter_params(filters: &EventFilters) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();
    if let Some(venue_id) = &filters.venue_id {
        params.push(("venue_id", venue_id.clone()));
    }
    if let Some(type_id) = &filters.event_type_id {
        params.push(("event_type_id", type_id.clone()));
    }
    if let Some(status) = filters.status {
        params.push(("status", status.as_str().to_string()));
    }
    params
}
