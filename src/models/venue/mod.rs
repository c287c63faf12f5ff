// Venue module
// Denormalized venue snapshot carried on events and conflict groups

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub capacity: u32,
}

impl Venue {
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Venue id cannot be empty".to_string());
        }
        if self.name.trim().is_empty() {
            return Err("Venue name cannot be empty".to_string());
        }
        Ok(())
    }
}
