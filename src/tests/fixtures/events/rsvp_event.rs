// Shared test fixture for RsvpEvent.

use chrono::DateTime;

use crate::modules::rsvp::core::event::{RsvpEvent, RsvpResponse};

/// Canonical event instance for tests, with a fixed timestamp so ledger rows
/// and message bodies are predictable.
pub fn make_rsvp_event(name: &str, response: RsvpResponse) -> RsvpEvent {
    RsvpEvent {
        timestamp: DateTime::from_timestamp_millis(1_700_000_000_000).unwrap(),
        name: name.to_string(),
        response,
    }
}
