//! Registration service
//!
//! Routes registration intents to the ledger, guards event capacity
//! before registering, persists the ledger after each mutation and
//! translates ledger outcomes into user-facing notices.

use tracing::{info, warn};

use crate::ledger::{CheckInOutcome, RegisterOutcome, RegistrationLedger};
use crate::models::{Event, Notice, Registration};
use crate::storage::LedgerStorage;

/// Write side of the application facade.
#[derive(Debug)]
pub struct RegistrationService {
    ledger: RegistrationLedger,
    storage: LedgerStorage,
}

impl RegistrationService {
    /// Create the service, loading any persisted ledger.
    ///
    /// A failed load is logged and the service starts with an empty
    /// ledger; registration remains available without durability.
    pub fn new(storage: LedgerStorage) -> Self {
        let ledger = match storage.load() {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(error = %e, "Could not load persisted ledger, starting empty");
                RegistrationLedger::new()
            }
        };

        Self { ledger, storage }
    }

    /// Create the service from an existing ledger, e.g. in tests.
    pub fn with_ledger(ledger: RegistrationLedger, storage: LedgerStorage) -> Self {
        Self { ledger, storage }
    }

    /// The current in-memory ledger.
    pub fn ledger(&self) -> &RegistrationLedger {
        &self.ledger
    }

    /// Register a user for an event, enforcing the capacity guard the
    /// ledger itself does not have.
    pub fn register(&mut self, event: &Event, user_id: &str) -> Notice {
        if event.is_full() {
            info!(user_id = %user_id, event_id = %event.id, "Registration refused, event is full");
            return Notice::warning(
                "Event Full",
                "This event has reached its participant limit.",
            );
        }

        match self.ledger.register(user_id, &event.id) {
            RegisterOutcome::Registered(_) => {
                self.persist();
                Notice::success(
                    "Registration Successful! 🎉",
                    "You've been registered for the event. Check your QR code in event details.",
                )
            }
            RegisterOutcome::AlreadyRegistered => Notice::info(
                "Already Registered",
                "You're already registered for this event.",
            ),
        }
    }

    /// Check a user in to an event they registered for.
    pub fn check_in(&mut self, user_id: &str, event_id: &str) -> Notice {
        match self.ledger.check_in(user_id, event_id) {
            CheckInOutcome::CheckedIn(_) => {
                self.persist();
                Notice::success("Checked In", "Attendance recorded. Enjoy the event!")
            }
            CheckInOutcome::AlreadyCheckedIn => Notice::info(
                "Already Checked In",
                "Your attendance was already recorded for this event.",
            ),
            CheckInOutcome::NotRegistered => Notice::warning(
                "Not Registered",
                "Register for this event before checking in.",
            ),
        }
    }

    /// Look up the registration for one (user, event) pair.
    pub fn find(&self, user_id: &str, event_id: &str) -> Option<&Registration> {
        self.ledger.find(user_id, event_id)
    }

    /// All registrations belonging to one user.
    pub fn registrations_for_user(&self, user_id: &str) -> Vec<&Registration> {
        self.ledger.registrations_for_user(user_id)
    }

    // A failed save keeps the in-memory state; the operation simply had
    // no durable effect.
    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.ledger) {
            warn!(
                error = %e,
                recoverable = e.is_recoverable(),
                path = %self.storage.path().display(),
                "Ledger mutation was not persisted"
            );
        }
    }
}
