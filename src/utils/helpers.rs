//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the application.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate an opaque QR token for one registration.
///
/// The token embeds the event id, a millisecond timestamp and a UUID
/// nonce. Uniqueness is the requirement here, not secrecy; the token is
/// rendered as a scannable proof-of-registration artifact.
pub fn generate_qr_token(event_id: &str) -> String {
    format!(
        "CampusConnect-{}-{}-{}",
        event_id,
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

/// Format a timestamp for display
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_token_embeds_event_id() {
        let token = generate_qr_token("42");
        assert!(token.starts_with("CampusConnect-42-"));
    }

    #[test]
    fn test_qr_tokens_are_unique() {
        let a = generate_qr_token("1");
        let b = generate_qr_token("1");
        assert_ne!(a, b);
    }
}
