use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use sales_lab::{format, GenerationParams};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::SessionParams;
use crate::state::AppState;

/// POST /api/generate_data  `{"num_records": 300, "seed": 42}`
///
/// Generate a fresh dataset, store it under a new session id, and return the
/// id together with headline statistics and a formatted preview.
pub async fn generate_data(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerationParams>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(params) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    let generator = params.into_builder()?.build()?;
    if generator.count() > state.max_records {
        return Err(AppError::bad_request(format!(
            "num_records must not exceed {}",
            state.max_records
        )));
    }
    let (count, seed) = (generator.count(), generator.seed());

    let (dataset, stats, preview) = tokio::task::spawn_blocking(move || {
        let dataset = generator.generate();
        let summary = dataset.summary();
        let stats = json!({
            "total_records": summary.total_records,
            "total_sales": summary.total_sales,
            "avg_sales": summary.avg_sales,
            "categories": summary.categories,
            "regions": summary.regions,
            "date_range": summary.date_range,
        });
        let preview = format::default_preview(&dataset);
        (dataset, stats, preview)
    })
    .await
    .map_err(|e| AppError::internal(format!("Generation task failed: {e}")))?;

    let session_id = state
        .sessions
        .lock()
        .map_err(|_| AppError::internal("Session lock poisoned"))?
        .insert(dataset);

    tracing::info!(session = %session_id, num_records = count, seed, "generated dataset");

    Ok(Json(json!({
        "session_id": session_id,
        "stats": stats,
        "preview": preview,
    })))
}

/// GET /api/data_table?session=<id>
///
/// Every row of the session's dataset, formatted for display.
pub async fn data_table(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SessionParams>,
) -> Result<Json<Value>, AppError> {
    let dataset = state.dataset(&params.require()?)?;
    let rows = tokio::task::spawn_blocking(move || format::table(&dataset))
        .await
        .map_err(|e| AppError::internal(format!("Table task failed: {e}")))?;
    let total = rows.len();
    Ok(Json(json!({ "data": rows, "total": total })))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::new(1_000, 8))
    }

    fn params(body: &str) -> Result<Json<GenerationParams>, JsonRejection> {
        Ok(Json(serde_json::from_str(body).unwrap()))
    }

    #[tokio::test]
    async fn generate_accepts_numeric_strings() {
        let Json(body) = generate_data(State(state()), params(r#"{"num_records":"25","seed":"3"}"#))
            .await
            .unwrap();
        assert_eq!(body["stats"]["total_records"], 25);
        assert_eq!(body["preview"].as_array().unwrap().len(), 10);
    }

    #[tokio::test]
    async fn generate_rejects_malformed_seed_with_400() {
        let err = generate_data(State(state()), params(r#"{"num_records":10,"seed":"abc"}"#))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("malformed seed"));
    }

    #[tokio::test]
    async fn generate_rejects_count_above_limit() {
        let err = generate_data(State(state()), params(r#"{"num_records":5000}"#))
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn data_table_returns_every_row() {
        let state = state();
        let Json(created) = generate_data(State(state.clone()), params(r#"{"num_records":12}"#))
            .await
            .unwrap();
        let session = created["session_id"].as_str().unwrap().to_string();

        let Json(table) = data_table(
            State(state),
            Query(SessionParams {
                session: Some(session),
            }),
        )
        .await
        .unwrap();
        assert_eq!(table["total"], 12);
    }
}
