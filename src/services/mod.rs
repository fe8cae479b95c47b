//! Services module
//!
//! This module contains the application facade and its two halves: the
//! read-only event directory and the mutating registration service.

pub mod directory;
pub mod registration;

// Re-export commonly used services
pub use directory::DirectoryService;
pub use registration::RegistrationService;

use crate::catalog::EventCatalog;
use crate::models::{Event, Notice, Registration};
use crate::query::QueryParams;
use crate::storage::LedgerStorage;
use crate::utils::errors::{CampusConnectError, Result};

/// Application facade composing the directory and registration services.
///
/// The presentation layer talks only to this type: it supplies query
/// parameters and registration intents, and receives ordered event
/// lists, registration lookups and notices back.
#[derive(Debug)]
pub struct CampusConnectApp {
    directory: DirectoryService,
    registrations: RegistrationService,
}

impl CampusConnectApp {
    /// Build the facade over a catalog and a ledger storage handle,
    /// loading any persisted registrations.
    pub fn new(catalog: EventCatalog, storage: LedgerStorage) -> Self {
        Self {
            directory: DirectoryService::new(catalog),
            registrations: RegistrationService::new(storage),
        }
    }

    /// The ordered event list for the given query parameters.
    pub fn list_events(&self, params: &QueryParams) -> Vec<Event> {
        self.directory.list(params)
    }

    /// Normalize raw string parameters into validated query parameters.
    pub fn parse_query(&self, search_text: &str, category: &str, sort_key: &str) -> Result<QueryParams> {
        self.directory.parse_query(search_text, category, sort_key)
    }

    /// Look up a single catalog event by id.
    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.directory.get(event_id)
    }

    /// Register a user for an event. Fails only when the event id is
    /// unknown; every ledger outcome becomes a notice.
    pub fn register(&mut self, user_id: &str, event_id: &str) -> Result<Notice> {
        let event = self
            .directory
            .get(event_id)
            .ok_or_else(|| CampusConnectError::EventNotFound {
                event_id: event_id.to_string(),
            })?;

        Ok(self.registrations.register(event, user_id))
    }

    /// Check a user in to an event. The ledger tolerates event ids no
    /// longer present in the catalog, so no catalog lookup is required.
    pub fn check_in(&mut self, user_id: &str, event_id: &str) -> Notice {
        self.registrations.check_in(user_id, event_id)
    }

    /// The registration for one (user, event) pair, if any. The
    /// presentation layer uses this to pick the affordance to show.
    pub fn registration_for(&self, user_id: &str, event_id: &str) -> Option<&Registration> {
        self.registrations.find(user_id, event_id)
    }

    /// A user's registrations joined against the catalog. The event is
    /// `None` for records whose event has since been removed.
    pub fn my_events(&self, user_id: &str) -> Vec<(&Registration, Option<&Event>)> {
        self.registrations
            .registrations_for_user(user_id)
            .into_iter()
            .map(|reg| (reg, self.directory.get(&reg.event_id)))
            .collect()
    }
}
