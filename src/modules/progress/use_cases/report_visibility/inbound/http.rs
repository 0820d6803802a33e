use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::progress::core::visibility::VisibilityEvent;
use crate::shell::state::AppState;

// Queues the event for the visibility worker. The outcome is observable through /progress.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<VisibilityEvent>, JsonRejection>,
) -> impl IntoResponse {
    let Json(event) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY,
    };
    if event.section_id.is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY;
    }
    match state.visibility.send(event).await {
        Ok(()) => StatusCode::ACCEPTED,
        Err(_) => {
            tracing::error!("visibility worker is gone");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
