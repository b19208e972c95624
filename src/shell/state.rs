use std::sync::Arc;

use crate::modules::rsvp::use_cases::submit_rsvp::handler::SubmitRsvpHandler;
use crate::shared::infrastructure::notifier::Notifier;
use crate::shared::infrastructure::record_store::RecordStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub submit_handler: Arc<SubmitRsvpHandler<dyn RecordStore, dyn Notifier>>,
}
