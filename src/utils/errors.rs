//! Error handling for Campus Connect
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the Campus Connect core
#[derive(Error, Debug)]
pub enum CampusConnectError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: String },

    #[error("Event is full: {event_id}")]
    EventFull { event_id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Campus Connect operations
pub type Result<T> = std::result::Result<T, CampusConnectError>;

impl CampusConnectError {
    /// Whether the operation can be retried or resumed without restart.
    ///
    /// Persistence failures leave the in-memory ledger intact, so they
    /// are recoverable; configuration problems are not.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CampusConnectError::Io(_) => true,
            CampusConnectError::Serialization(_) => false,
            CampusConnectError::Config(_) => false,
            CampusConnectError::EventNotFound { .. } => false,
            CampusConnectError::EventFull { .. } => false,
            CampusConnectError::InvalidInput(_) => false,
        }
    }
}
