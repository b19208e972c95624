use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

use crate::modules::rsvp::core::tally::Tally;
use crate::modules::rsvp::use_cases::submit_rsvp::command::SubmitRsvp;
use crate::modules::rsvp::use_cases::submit_rsvp::handler::ApplicationError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SubmitRsvpBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub response: String,
}

#[derive(Serialize)]
pub struct SubmitRsvpResponse {
    pub ok: bool,
    pub timestamp: String,
    pub tally: Tally,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

fn invalid_payload() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "Invalid payload",
        }),
    )
        .into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SubmitRsvpBody>, JsonRejection>,
) -> impl IntoResponse {
    // Missing fields and malformed JSON are the same client error.
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return invalid_payload(),
    };

    let request_id = Uuid::now_v7();
    let command = SubmitRsvp {
        name: body.name,
        response: body.response,
    };

    match state.submit_handler.handle(command).await {
        Ok(receipt) => {
            info!(
                request_id = %request_id,
                name = %receipt.event.name,
                response = %receipt.event.response,
                "rsvp recorded"
            );
            (
                StatusCode::OK,
                Json(SubmitRsvpResponse {
                    ok: true,
                    timestamp: receipt.event.timestamp_string(),
                    tally: receipt.tally,
                }),
            )
                .into_response()
        }
        Err(ApplicationError::Invalid(_)) => invalid_payload(),
        Err(ApplicationError::Store(err)) => {
            error!(request_id = %request_id, error = %err, "failed to record rsvp");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: "Failed to record response",
                }),
            )
                .into_response()
        }
    }
}
