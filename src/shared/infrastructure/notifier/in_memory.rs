// In memory implementation of the Notifier port.
//
// Purpose
// - Let tests observe what would have been sent, and force failures to prove
//   they never affect an already-persisted append.

use tokio::sync::Mutex;

use crate::modules::rsvp::core::event::RsvpEvent;
use crate::modules::rsvp::core::tally::Tally;
use crate::shared::infrastructure::notifier::{Notifier, NotifyError, OperatorMessage};

#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<OperatorMessage>>,
    failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every notify call fail with a transport error.
    pub fn toggle_failing(&mut self) {
        self.failing = !self.failing;
    }
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, event: &RsvpEvent, tally: &Tally) -> Result<(), NotifyError> {
        if self.failing {
            return Err(NotifyError::Transport("notifier offline".into()));
        }
        self.sent
            .lock()
            .await
            .push(OperatorMessage::for_event("operator@test", event, tally));
        Ok(())
    }

    async fn verify(&self) -> Result<(), NotifyError> {
        if self.failing {
            return Err(NotifyError::Transport("notifier offline".into()));
        }
        Ok(())
    }
}
