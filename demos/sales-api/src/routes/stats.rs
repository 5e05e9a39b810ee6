use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Json;
use sales_lab::format::DetailedStatistics;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::SessionParams;
use crate::state::AppState;

/// GET /api/statistics?session=<id>
///
/// Display-formatted statistics plus the raw summary they were built from.
pub async fn get_statistics(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SessionParams>,
) -> Result<Json<Value>, AppError> {
    let dataset = state.dataset(&params.require()?)?;
    let (summary, statistics) = tokio::task::spawn_blocking(move || {
        let summary = dataset.summary();
        let statistics = DetailedStatistics::from(&summary);
        (summary, statistics)
    })
    .await
    .map_err(|e| AppError::internal(format!("Statistics task failed: {e}")))?;
    Ok(Json(json!({
        "statistics": statistics,
        "summary": summary,
    })))
}
