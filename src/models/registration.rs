//! Registration model
//!
//! A registration records one user's commitment to one event, from
//! initial sign-up through the terminal checked-in state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's commitment record for a single event.
///
/// `event_id` is a weak reference into the catalog; the record stays
/// valid even if the event is later removed. At most one registration
/// exists per (user_id, event_id) pair. The persisted layout uses
/// camelCase keys and omits `checkedInAt` while the user has not
/// checked in, so stored ledgers round-trip field-for-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub event_id: String,
    pub user_id: String,
    pub registered_at: DateTime<Utc>,
    pub qr_code: String,
    pub checked_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_in_at: Option<DateTime<Utc>>,
}

impl Registration {
    /// Create a fresh registration in the Registered state.
    pub fn new(user_id: &str, event_id: &str, qr_code: String, registered_at: DateTime<Utc>) -> Self {
        Self {
            event_id: event_id.to_string(),
            user_id: user_id.to_string(),
            registered_at,
            qr_code,
            checked_in: false,
            checked_in_at: None,
        }
    }

    /// Mark the registration as checked in. The transition is terminal;
    /// callers guard against repeating it.
    pub fn mark_checked_in(&mut self, at: DateTime<Utc>) {
        self.checked_in = true;
        self.checked_in_at = Some(at);
    }
}
