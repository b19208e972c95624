// Notifier port: best-effort outbound message to the operator, one per new
// RSVP. A notifier failure is reported to the caller but must never undo or
// block an already-persisted event.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::rsvp::core::event::RsvpEvent;
use crate::modules::rsvp::core::tally::Tally;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notify transport error: {0}")]
    Transport(String),
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send one message summarizing the event and the current tally.
    async fn notify(&self, event: &RsvpEvent, tally: &Tally) -> Result<(), NotifyError>;

    /// Startup connectivity self-check. A failure is a warning at the call
    /// site, never a reason not to serve.
    async fn verify(&self) -> Result<(), NotifyError>;
}

/// The one-line operator message, shared by every transport.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OperatorMessage {
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl OperatorMessage {
    pub fn for_event(operator: &str, event: &RsvpEvent, tally: &Tally) -> Self {
        Self {
            to: operator.to_string(),
            subject: format!("RSVP: {} — {}", event.name, event.response),
            text: format!(
                "{} has {} at {}.\nTotals -> Accepted: {}, Declined: {}",
                event.name,
                event.response,
                event.timestamp_string(),
                tally.accepted,
                tally.declined
            ),
        }
    }
}

pub mod in_memory;
pub mod log;
pub mod webhook;
