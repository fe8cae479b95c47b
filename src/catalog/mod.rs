//! Event catalog module
//!
//! The Event Store: a fixed, ordered sequence of events loaded once at
//! startup, either from the built-in sample data or from a JSON file.
//! The catalog is never mutated by the core.

pub mod seed;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::models::Event;
use crate::utils::errors::Result;

pub use seed::seed_events;

/// Immutable, ordered catalog of events.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
}

impl EventCatalog {
    /// Build the catalog from the built-in sample data.
    pub fn seed() -> Self {
        let events = seed_events();
        debug!(count = events.len(), "Loaded built-in sample catalog");
        Self { events }
    }

    /// Build the catalog from an explicit event list.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    /// Load the catalog from a JSON file containing an array of events.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let events: Vec<Event> = serde_json::from_str(&raw)?;
        info!(path = %path.display(), count = events.len(), "Loaded event catalog from file");
        Ok(Self { events })
    }

    /// The full catalog in its original order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up a single event by id.
    pub fn get(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == event_id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_id() {
        let catalog = EventCatalog::seed();
        let event = catalog.get("2").unwrap();
        assert_eq!(event.title, "Campus Basketball Tournament");
        assert!(catalog.get("404").is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = EventCatalog::seed();
        let ids: Vec<&str> = catalog.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }
}
