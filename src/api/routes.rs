//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::classifier;
use crate::config::Config;
use crate::duration::DurationRange;
use crate::predictions::PredictionTable;

use super::types::*;

/// Shared application state. Read-only after startup, so handlers share it
/// behind a plain `Arc` without locking.
pub struct AppState {
    pub config: Config,
    pub table: PredictionTable,
}

/// Start the HTTP server.
///
/// The prediction table is injected by the caller; a load failure has
/// already aborted startup before this point.
pub async fn serve(config: Config, table: PredictionTable) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);

    let state = Arc::new(AppState { config, table });

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Build the application router.
fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // task_name is a wildcard so names containing `/` still resolve
        .route("/predict/*task_name", get(predict))
        .route("/task-types", get(task_types))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Predict the duration range for a task name.
async fn predict(
    State(state): State<Arc<AppState>>,
    Path(task_name): Path<String>,
) -> Result<Json<PredictResponse>, (StatusCode, Json<ErrorResponse>)> {
    let task_type = classifier::classify(&state.table, &task_name);

    let Some(entry) = state.table.get(&task_type) else {
        // Only reachable when the resolved category is missing from the
        // loaded table (e.g. an unseeded fallback category)
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                detail: format!(
                    "Could not classify '{}'. Use /task-types to see valid categories.",
                    task_name
                ),
            }),
        ));
    };

    let range = DurationRange::from_prediction(entry.predicted_mean, entry.error);

    Ok(Json(PredictResponse {
        task_name,
        task_type,
        predicted_days: range.min_days,
        max_days: range.max_days,
        message: range.message(),
    }))
}

/// List the known task types, in load order.
async fn task_types(State(state): State<Arc<AppState>>) -> Json<TaskTypesResponse> {
    Json(TaskTypesResponse {
        task_types: state.table.task_types().map(str::to_string).collect(),
    })
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
