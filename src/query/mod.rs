//! Query engine module
//!
//! Pure functions over event slices: text search, category filtering and
//! stable sorting. Nothing here can fail; every edge case degrades to an
//! empty or unchanged result. Inputs are never mutated.

use crate::models::{CategoryFilter, Event, SortKey};

/// The (search text, category, sort key) tuple that deterministically
/// selects and orders the visible event list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    pub search_text: String,
    pub category: CategoryFilter,
    pub sort_key: SortKey,
}

/// Case-insensitive substring search over title, venue and tags.
///
/// Empty or whitespace-only text is the identity; no match yields an
/// empty vec, never an error.
pub fn search(events: &[Event], text: &str) -> Vec<Event> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return events.to_vec();
    }

    events
        .iter()
        .filter(|event| {
            event.title.to_lowercase().contains(&needle)
                || event.venue.to_lowercase().contains(&needle)
                || event.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Keep only events matching the filter; `CategoryFilter::All` is the
/// identity. Matching is exact, no partial categories.
pub fn filter_by_category(events: &[Event], filter: CategoryFilter) -> Vec<Event> {
    match filter {
        CategoryFilter::All => events.to_vec(),
        CategoryFilter::Only(category) => events
            .iter()
            .filter(|event| event.category == category)
            .cloned()
            .collect(),
    }
}

/// Return a newly ordered copy of the input.
///
/// All keys sort stably, so elements comparing equal keep their
/// relative input order.
pub fn sort_events(events: &[Event], key: SortKey) -> Vec<Event> {
    let mut sorted = events.to_vec();
    match key {
        SortKey::Date => sorted.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::Popularity => {
            sorted.sort_by(|a, b| b.current_participants.cmp(&a.current_participants))
        }
        SortKey::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    sorted
}

/// Apply the full pipeline in its fixed order: search, then category
/// filter, then sort.
pub fn apply(events: &[Event], params: &QueryParams) -> Vec<Event> {
    let found = search(events, &params.search_text);
    let filtered = filter_by_category(&found, params.category);
    sort_events(&filtered, params.sort_key)
}
