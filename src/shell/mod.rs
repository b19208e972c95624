// Composition root for the rsvp service.
//
// Responsibilities:
// - Read config from environment, once, at startup.
// - Instantiate the concrete record store and notifier.
// - Wire them into the submit handler and the axum router.

pub mod config;
pub mod http;
pub mod state;
