//! Event model
//!
//! Catalog records and the closed query-parameter enumerations
//! (category filter and sort key) that select and order them.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog entry describing a campus activity open for registration.
///
/// Events are immutable once loaded; the core never mutates them.
/// `current_participants` is display-only seed data and is not updated
/// by registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "time_hm")]
    pub time: NaiveTime,
    pub venue: String,
    pub category: EventCategory,
    pub max_participants: u32,
    pub current_participants: u32,
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub organizer: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Whether the event has reached its participant cap.
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    /// Remaining capacity, saturating at zero.
    pub fn spots_remaining(&self) -> u32 {
        self.max_participants.saturating_sub(self.current_participants)
    }
}

/// Event category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Workshop,
    Seminar,
    Sports,
    Tech,
    Social,
    Academic,
}

impl EventCategory {
    /// All known categories, in display order.
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Workshop,
        EventCategory::Seminar,
        EventCategory::Sports,
        EventCategory::Tech,
        EventCategory::Social,
        EventCategory::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Workshop => "Workshop",
            EventCategory::Seminar => "Seminar",
            EventCategory::Sports => "Sports",
            EventCategory::Tech => "Tech",
            EventCategory::Social => "Social",
            EventCategory::Academic => "Academic",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "workshop" => Ok(EventCategory::Workshop),
            "seminar" => Ok(EventCategory::Seminar),
            "sports" => Ok(EventCategory::Sports),
            "tech" => Ok(EventCategory::Tech),
            "social" => Ok(EventCategory::Social),
            "academic" => Ok(EventCategory::Academic),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// Category filter used by the query engine.
///
/// `All` is the sentinel that keeps every event; `Only` matches the
/// category exactly, no partial matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Sort key for the event listing.
///
/// `Newest` orders by the explicit `created_at` timestamp rather than by
/// parsing the opaque id, so non-numeric ids sort correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Date,
    Popularity,
    Newest,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Date => f.write_str("date"),
            SortKey::Popularity => f.write_str("popularity"),
            SortKey::Newest => f.write_str("newest"),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "popularity" => Ok(SortKey::Popularity),
            "newest" => Ok(SortKey::Newest),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

/// Serde helper keeping event times in the catalog's `HH:MM` layout.
mod time_hm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("Tech".parse::<EventCategory>(), Ok(EventCategory::Tech));
        assert_eq!("sports".parse::<EventCategory>(), Ok(EventCategory::Sports));
        assert!("Dance".parse::<EventCategory>().is_err());
    }

    #[test]
    fn test_category_filter_sentinel() {
        assert_eq!("All".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "Workshop".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(EventCategory::Workshop))
        );
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!("date".parse::<SortKey>(), Ok(SortKey::Date));
        assert_eq!("Popularity".parse::<SortKey>(), Ok(SortKey::Popularity));
        assert!("oldest".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_event_time_layout_round_trip() {
        let event = Event {
            id: "1".to_string(),
            title: "Test".to_string(),
            description: "Test event".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
            venue: "Lab A".to_string(),
            category: EventCategory::Tech,
            max_participants: 30,
            current_participants: 23,
            tags: vec!["AI".to_string()],
            image: None,
            organizer: "CS Department".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["time"], "14:00");
        assert_eq!(json["date"], "2024-03-15");
        assert_eq!(json["maxParticipants"], 30);
        assert!(json.get("image").is_none());

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn test_capacity_helpers() {
        let mut event = Event {
            id: "2".to_string(),
            title: "Full house".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
            time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            venue: "Arena".to_string(),
            category: EventCategory::Sports,
            max_participants: 10,
            current_participants: 10,
            tags: vec![],
            image: None,
            organizer: "Sports Committee".to_string(),
            created_at: Utc::now(),
        };

        assert!(event.is_full());
        assert_eq!(event.spots_remaining(), 0);

        event.current_participants = 4;
        assert!(!event.is_full());
        assert_eq!(event.spots_remaining(), 6);
    }
}
