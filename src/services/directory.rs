//! Event directory service
//!
//! Composes the query engine over the event catalog and validates raw
//! query parameters at the boundary, so only closed enum values reach
//! the engine itself.

use tracing::{debug, warn};

use crate::catalog::EventCatalog;
use crate::models::Event;
use crate::query::{self, QueryParams};
use crate::utils::errors::{CampusConnectError, Result};

/// Read side of the application facade.
#[derive(Debug, Clone)]
pub struct DirectoryService {
    catalog: EventCatalog,
}

impl DirectoryService {
    /// Create a new DirectoryService over a loaded catalog.
    pub fn new(catalog: EventCatalog) -> Self {
        Self { catalog }
    }

    /// The ordered event list for the given query parameters.
    pub fn list(&self, params: &QueryParams) -> Vec<Event> {
        let events = query::apply(self.catalog.events(), params);
        debug!(
            search = %params.search_text,
            category = %params.category,
            sort = %params.sort_key,
            matched = events.len(),
            "Event listing produced"
        );
        events
    }

    /// Look up a single catalog event by id.
    pub fn get(&self, event_id: &str) -> Option<&Event> {
        self.catalog.get(event_id)
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    /// Normalize raw string parameters into validated query parameters.
    ///
    /// Unrecognized category or sort values are rejected here instead of
    /// leaking into the query engine.
    pub fn parse_query(&self, search_text: &str, category: &str, sort_key: &str) -> Result<QueryParams> {
        let category = category.parse().map_err(|e: String| {
            warn!(category = %category, "Rejected unknown category filter");
            CampusConnectError::InvalidInput(e)
        })?;

        let sort_key = sort_key.parse().map_err(|e: String| {
            warn!(sort = %sort_key, "Rejected unknown sort key");
            CampusConnectError::InvalidInput(e)
        })?;

        Ok(QueryParams {
            search_text: search_text.to_string(),
            category,
            sort_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryFilter, EventCategory, SortKey};

    fn service() -> DirectoryService {
        DirectoryService::new(EventCatalog::seed())
    }

    #[test]
    fn test_parse_query_normalizes_values() {
        let params = service().parse_query("ai", "tech", "POPULARITY").unwrap();
        assert_eq!(params.search_text, "ai");
        assert_eq!(params.category, CategoryFilter::Only(EventCategory::Tech));
        assert_eq!(params.sort_key, SortKey::Popularity);
    }

    #[test]
    fn test_parse_query_rejects_unknown_values() {
        assert!(service().parse_query("", "Dance", "date").is_err());
        assert!(service().parse_query("", "All", "oldest").is_err());
    }

    #[test]
    fn test_list_with_default_params_returns_catalog() {
        let service = service();
        let events = service.list(&QueryParams::default());
        assert_eq!(events.len(), service.catalog().len());
    }
}
