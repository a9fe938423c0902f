//! HTTP endpoint handlers

use std::sync::Arc;

use axum::{extract::State, response::Json};
use tracing::debug;

use super::responses::{CountdownResponse, HealthResponse};
use crate::state::AppState;

/// Handle GET /countdown - Return the latest countdown snapshot
pub async fn countdown_handler(State(state): State<Arc<AppState>>) -> Json<CountdownResponse> {
    let snapshot = state.latest_snapshot();
    debug!(
        "Countdown endpoint called - complete={}, {}d remaining",
        snapshot.is_complete, snapshot.days_numeric
    );

    Json(CountdownResponse::new(
        state.target,
        snapshot,
        state.get_uptime(),
    ))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
