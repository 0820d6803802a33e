use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::progress::use_cases::read_progress::projection::ProgressSnapshot;
use crate::modules::progress::use_cases::track_progress::errors::PreconditionError;
use crate::shell::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkVisitedResponse {
    pub newly_visited: bool,
    pub progress: ProgressSnapshot,
}

pub fn precondition_status(error: PreconditionError) -> StatusCode {
    match error {
        PreconditionError::EmptySectionId | PreconditionError::NoSections => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        PreconditionError::NotInitialized | PreconditionError::AlreadyInitialized => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(section_id): Path<String>,
) -> impl IntoResponse {
    let mut tracker = state.tracker.lock().await;
    let newly_visited = match tracker.mark_visited(&section_id) {
        Ok(newly_visited) => newly_visited,
        Err(error) => return precondition_status(error).into_response(),
    };
    match tracker.snapshot() {
        Ok(progress) => Json(MarkVisitedResponse {
            newly_visited,
            progress,
        })
        .into_response(),
        Err(error) => precondition_status(error).into_response(),
    }
}
