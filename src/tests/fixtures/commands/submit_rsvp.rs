// Shared test fixture for the SubmitRsvp command.

use crate::modules::rsvp::use_cases::submit_rsvp::command::SubmitRsvp;

pub struct SubmitRsvpBuilder {
    inner: SubmitRsvp,
}

impl Default for SubmitRsvpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmitRsvpBuilder {
    pub fn new() -> Self {
        Self {
            inner: SubmitRsvp {
                name: "Ada Lovelace".to_string(),
                response: "accepted".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn response(mut self, v: impl Into<String>) -> Self {
        self.inner.response = v.into();
        self
    }

    pub fn build(self) -> SubmitRsvp {
        self.inner
    }
}
