//! Registration ledger module
//!
//! The ledger tracks user commitments to events as a two-step state
//! machine per (user, event) pair: Registered, then the terminal
//! CheckedIn. Both transitions are idempotent; no transition removes a
//! record. Capacity is deliberately not enforced here — the ledger only
//! tracks commitments, the facade owns the capacity guard.

use chrono::Utc;
use tracing::{debug, info};

use crate::models::Registration;
use crate::utils::helpers::generate_qr_token;

/// Outcome of a registration attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum RegisterOutcome {
    /// A new registration was appended to the ledger.
    Registered(Registration),
    /// A registration already existed for this (user, event) pair; the
    /// ledger is unchanged.
    AlreadyRegistered,
}

/// Outcome of a check-in attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckInOutcome {
    /// The registration transitioned to the terminal checked-in state.
    CheckedIn(Registration),
    /// The registration was already checked in; the ledger is unchanged.
    AlreadyCheckedIn,
    /// No registration exists for this (user, event) pair.
    NotRegistered,
}

/// The persisted list of registration records.
///
/// Expected sizes are tens of records, so lookups are linear scans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationLedger {
    records: Vec<Registration>,
}

impl RegistrationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from previously persisted records.
    pub fn from_records(records: Vec<Registration>) -> Self {
        Self { records }
    }

    /// All records in registration order.
    pub fn records(&self) -> &[Registration] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the registration for one (user, event) pair.
    pub fn find(&self, user_id: &str, event_id: &str) -> Option<&Registration> {
        self.records
            .iter()
            .find(|reg| reg.user_id == user_id && reg.event_id == event_id)
    }

    /// All registrations belonging to one user, in registration order.
    pub fn registrations_for_user(&self, user_id: &str) -> Vec<&Registration> {
        self.records
            .iter()
            .filter(|reg| reg.user_id == user_id)
            .collect()
    }

    /// Number of registrations recorded for one event, across users.
    pub fn count_for_event(&self, event_id: &str) -> usize {
        self.records
            .iter()
            .filter(|reg| reg.event_id == event_id)
            .count()
    }

    /// Register a user for an event.
    ///
    /// Idempotent: a second call for the same pair reports
    /// `AlreadyRegistered` and leaves the ledger untouched, which also
    /// guards duplicate rapid submissions.
    pub fn register(&mut self, user_id: &str, event_id: &str) -> RegisterOutcome {
        if self.find(user_id, event_id).is_some() {
            debug!(user_id = %user_id, event_id = %event_id, "Registration already exists");
            return RegisterOutcome::AlreadyRegistered;
        }

        let registration = Registration::new(
            user_id,
            event_id,
            generate_qr_token(event_id),
            Utc::now(),
        );
        self.records.push(registration.clone());

        info!(user_id = %user_id, event_id = %event_id, "User registered for event");
        RegisterOutcome::Registered(registration)
    }

    /// Transition a registration to the terminal checked-in state.
    ///
    /// Idempotent: repeating the call reports `AlreadyCheckedIn` and
    /// leaves the recorded check-in time unchanged.
    pub fn check_in(&mut self, user_id: &str, event_id: &str) -> CheckInOutcome {
        let record = self
            .records
            .iter_mut()
            .find(|reg| reg.user_id == user_id && reg.event_id == event_id);

        match record {
            None => {
                debug!(user_id = %user_id, event_id = %event_id, "Check-in without registration");
                CheckInOutcome::NotRegistered
            }
            Some(reg) if reg.checked_in => {
                debug!(user_id = %user_id, event_id = %event_id, "Registration already checked in");
                CheckInOutcome::AlreadyCheckedIn
            }
            Some(reg) => {
                reg.mark_checked_in(Utc::now());
                info!(user_id = %user_id, event_id = %event_id, "User checked in to event");
                CheckInOutcome::CheckedIn(reg.clone())
            }
        }
    }
}
