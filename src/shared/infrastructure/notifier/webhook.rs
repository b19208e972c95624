// Webhook implementation of the Notifier port.
//
// Posts the operator message as JSON to a configured relay URL (a mail
// gateway, chat webhook, or anything that accepts `{to, subject, text}`).
// The relay itself is opaque to this adapter.

use crate::modules::rsvp::core::event::RsvpEvent;
use crate::modules::rsvp::core::tally::Tally;
use crate::shared::infrastructure::notifier::{Notifier, NotifyError, OperatorMessage};

pub struct WebhookNotifier {
    client: reqwest::Client,
    url: String,
    operator: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, operator: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            operator: operator.into(),
        }
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, event: &RsvpEvent, tally: &Tally) -> Result<(), NotifyError> {
        let message = OperatorMessage::for_event(&self.operator, event, tally);
        self.client
            .post(&self.url)
            .json(&message)
            .send()
            .await
            .map_err(|err| NotifyError::Transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| NotifyError::Transport(err.to_string()))?;
        Ok(())
    }

    async fn verify(&self) -> Result<(), NotifyError> {
        self.client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| NotifyError::Transport(err.to_string()))?
            .error_for_status()
            .map_err(|err| NotifyError::Transport(err.to_string()))?;
        Ok(())
    }
}
