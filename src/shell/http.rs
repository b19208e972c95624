use axum::{
    Router,
    routing::{get, post},
};

use crate::modules::rsvp::use_cases::submit_rsvp::inbound::http as submit_http;
use crate::modules::rsvp::use_cases::view_tally::inbound::http as tally_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/rsvp", post(submit_http::handle))
        .route("/tally", get(tally_http::handle))
        .with_state(state)
}
