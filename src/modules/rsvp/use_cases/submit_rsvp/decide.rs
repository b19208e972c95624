use chrono::{DateTime, Utc};

use crate::modules::rsvp::core::event::{RsvpEvent, RsvpResponse};
use crate::modules::rsvp::use_cases::submit_rsvp::command::SubmitRsvp;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("response must be \"accepted\" or \"declined\"")]
    UnknownResponse,
}

/// Validate a submission and turn it into the event to record. The caller
/// supplies the timestamp so the decision stays a pure function.
pub fn decide_submit(
    command: SubmitRsvp,
    timestamp: DateTime<Utc>,
) -> Result<RsvpEvent, DecideError> {
    let name = command.name.trim();
    if name.is_empty() {
        return Err(DecideError::EmptyName);
    }
    let response =
        RsvpResponse::parse(command.response.trim()).ok_or(DecideError::UnknownResponse)?;
    Ok(RsvpEvent {
        timestamp,
        name: name.to_string(),
        response,
    })
}
