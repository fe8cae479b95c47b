//! Campus Connect event directory core
//!
//! The reusable core of a campus event directory: an immutable event
//! catalog, a pure query engine for search/filter/sort, a registration
//! ledger with an idempotent register → check-in state machine, JSON
//! file persistence, and an application facade that composes them for a
//! presentation layer.

pub mod catalog;
pub mod config;
pub mod ledger;
pub mod models;
pub mod query;
pub mod services;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CampusConnectError, Result};

// Re-export main components for easy access
pub use catalog::EventCatalog;
pub use ledger::RegistrationLedger;
pub use services::CampusConnectApp;
pub use storage::LedgerStorage;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
