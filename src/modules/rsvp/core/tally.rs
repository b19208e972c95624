use crate::modules::rsvp::core::event::{RsvpEvent, RsvpResponse};

/// Running counts of accepted vs declined events. Derived state: after every
/// successful append it equals the per-kind counts of all events in the store,
/// so `accepted + declined` equals the total number of events recorded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub struct Tally {
    pub accepted: u64,
    pub declined: u64,
}

impl Tally {
    pub fn record(&mut self, response: RsvpResponse) {
        match response {
            RsvpResponse::Accepted => self.accepted += 1,
            RsvpResponse::Declined => self.declined += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.accepted + self.declined
    }

    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a RsvpEvent>) -> Self {
        let mut tally = Tally::default();
        for event in events {
            tally.record(event.response);
        }
        tally
    }
}
