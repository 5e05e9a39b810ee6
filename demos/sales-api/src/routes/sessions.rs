use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;

use crate::error::AppError;
use crate::state::AppState;

/// DELETE /api/sessions/{id}
///
/// Drop a session's dataset. Returns 204, or 404 if the id is unknown.
pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state
        .sessions
        .lock()
        .map_err(|_| AppError::internal("Session lock poisoned"))?
        .remove(&id);
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(format!("No session '{id}'")))
    }
}
