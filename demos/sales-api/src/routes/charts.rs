use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Json;
use sales_lab::ChartKind;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::SessionParams;
use crate::state::AppState;

/// GET /api/charts
///
/// The chart kinds `chart_data` accepts.
pub async fn list_charts() -> Json<Value> {
    let kinds: Vec<&str> = ChartKind::ALL.iter().map(|k| k.as_str()).collect();
    Json(json!({ "data": kinds, "count": kinds.len() }))
}

/// GET /api/chart_data/{kind}?session=<id>
///
/// Aggregated series for one chart kind over the session's dataset.
pub async fn chart_data(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Query(params): Query<SessionParams>,
) -> Result<Json<Value>, AppError> {
    let kind: ChartKind = kind.parse()?;
    let dataset = state.dataset(&params.require()?)?;
    let data = tokio::task::spawn_blocking(move || dataset.charts().build(kind))
        .await
        .map_err(|e| AppError::internal(format!("Chart task failed: {e}")))?;
    Ok(Json(json!({ "data": data })))
}
