use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database does not answer.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Live connections currently held by the pool.
    pub pool_size: u32,
    /// Of those, how many are idle.
    pub pool_idle: usize,
    pub pool_max: u32,
}

/// GET /health -- service, database and pool status.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = todo_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool_size: state.pool.size(),
        pool_idle: state.pool.num_idle(),
        pool_max: state.config.pool.max_connections,
    })
}

/// Mount health check routes (root level, not under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
