use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::progress::use_cases::track_progress::inbound::http::precondition_status;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.tracker.lock().await.snapshot() {
        Ok(snapshot) => Json(snapshot).into_response(),
        Err(error) => precondition_status(error).into_response(),
    }
}
