// Log-only implementation of the Notifier port, used when no relay URL is
// configured. The operator message lands in the server log instead of a
// mailbox, which keeps local development and demos working without transport
// credentials.

use tracing::info;

use crate::modules::rsvp::core::event::RsvpEvent;
use crate::modules::rsvp::core::tally::Tally;
use crate::shared::infrastructure::notifier::{Notifier, NotifyError, OperatorMessage};

pub struct LogNotifier {
    operator: String,
}

impl LogNotifier {
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, event: &RsvpEvent, tally: &Tally) -> Result<(), NotifyError> {
        let message = OperatorMessage::for_event(&self.operator, event, tally);
        info!(to = %message.to, subject = %message.subject, "rsvp notification");
        Ok(())
    }

    async fn verify(&self) -> Result<(), NotifyError> {
        Ok(())
    }
}
