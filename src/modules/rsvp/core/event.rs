// Domain fact: one guest's recorded accept/decline.
//
// Purpose
// - Record the business fact that a guest answered the invitation.
//
// Responsibilities
// - Carry only the timestamp, guest name and answer; nothing else is stored.
//
// Lifecycle
// - Created exactly once per valid submission, appended to the record store,
//   never mutated or deleted afterwards.

use chrono::{DateTime, SecondsFormat, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RsvpResponse {
    Accepted,
    Declined,
}

impl RsvpResponse {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "accepted" => Some(RsvpResponse::Accepted),
            "declined" => Some(RsvpResponse::Declined),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpResponse::Accepted => "accepted",
            RsvpResponse::Declined => "declined",
        }
    }
}

impl std::fmt::Display for RsvpResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RsvpEvent {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub response: RsvpResponse,
}

impl RsvpEvent {
    /// Timestamp in the wire format used by the ledger and the HTTP response
    /// (RFC 3339, millisecond precision, `Z` suffix).
    pub fn timestamp_string(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
