mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use clap::Parser;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/generate_data", post(routes::data::generate_data))
        .route("/api/data_table", get(routes::data::data_table))
        .route("/api/statistics", get(routes::stats::get_statistics))
        .route("/api/charts", get(routes::charts::list_charts))
        .route("/api/chart_data/{kind}", get(routes::charts::chart_data))
        .route("/api/sessions/{id}", delete(routes::sessions::delete_session))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sales_lab=debug,tower_http=debug")),
        )
        .init();

    let config = Config::parse();
    let state = Arc::new(AppState::new(config.max_records, config.max_sessions));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
