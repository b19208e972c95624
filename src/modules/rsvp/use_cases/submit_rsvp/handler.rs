use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::warn;

use crate::modules::rsvp::core::event::RsvpEvent;
use crate::modules::rsvp::core::tally::Tally;
use crate::modules::rsvp::use_cases::submit_rsvp::command::SubmitRsvp;
use crate::modules::rsvp::use_cases::submit_rsvp::decide::{decide_submit, DecideError};
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::record_store::{RecordStore, StoreError};

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("invalid submission: {0}")]
    Invalid(#[from] DecideError),
}

/// What the caller gets back once the event is durable.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub event: RsvpEvent,
    pub tally: Tally,
}

/// Per-request pipeline: validate, stamp the time, append, notify.
///
/// The append must succeed before the notifier runs, and a notifier failure
/// is logged and swallowed: the event is already durable and the response
/// reports success for the append. This is the one notification policy for
/// every code path. Nothing is retried; each external call happens once.
pub struct SubmitRsvpHandler<TStore, TNotifier>
where
    TStore: RecordStore + ?Sized + 'static,
    TNotifier: Notifier + ?Sized + 'static,
{
    store: Arc<TStore>,
    notifier: Arc<TNotifier>,
}

impl<TStore, TNotifier> SubmitRsvpHandler<TStore, TNotifier>
where
    TStore: RecordStore + ?Sized + 'static,
    TNotifier: Notifier + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>, notifier: Arc<TNotifier>) -> Self {
        Self { store, notifier }
    }

    pub async fn handle(&self, command: SubmitRsvp) -> Result<Receipt, ApplicationError> {
        let event = decide_submit(command, Utc::now())?;
        let tally = self.store.append(&event).await?;
        if let Err(err) = self.notifier.notify(&event, &tally).await {
            warn!(error = %err, name = %event.name, "notification failed after append");
        }
        Ok(Receipt { event, tally })
    }
}
