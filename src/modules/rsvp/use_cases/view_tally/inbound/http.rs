use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.tally().await {
        Ok(tally) => Json(tally).into_response(),
        Err(err) => {
            error!(error = %err, "failed to read tally");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
