//! Test fixtures and data for integration tests
//!
//! This module provides catalog and event builders shared by the
//! integration test suites.

// Not every suite uses every fixture.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use campus_connect::catalog::{seed_events, EventCatalog};
use campus_connect::models::{Event, EventCategory};

/// The six-event sample catalog.
pub fn sample_catalog() -> EventCatalog {
    EventCatalog::seed()
}

/// The sample catalog as a plain event list.
pub fn sample_events() -> Vec<Event> {
    seed_events()
}

/// Builder for ad-hoc test events.
#[derive(Debug, Clone)]
pub struct TestEventBuilder {
    event: Event,
}

impl TestEventBuilder {
    pub fn new(id: &str, title: &str) -> Self {
        Self {
            event: Event {
                id: id.to_string(),
                title: title.to_string(),
                description: format!("{} description", title),
                date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
                time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                venue: "Test Hall".to_string(),
                category: EventCategory::Workshop,
                max_participants: 50,
                current_participants: 0,
                tags: vec![],
                image: None,
                organizer: "Test Organizer".to_string(),
                created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            },
        }
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.event.category = category;
        self
    }

    pub fn date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.event.date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn participants(mut self, current: u32, max: u32) -> Self {
        self.event.current_participants = current;
        self.event.max_participants = max;
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.event.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.event.created_at = created_at;
        self
    }

    pub fn build(self) -> Event {
        self.event
    }
}
