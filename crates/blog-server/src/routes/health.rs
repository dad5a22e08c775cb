//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Database status.
    pub database: String,
}

/// GET /health - Health check endpoint.
///
/// Returns 503 when the database does not answer.
async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    state.store().ping().await.map_err(|e| {
        tracing::warn!(error = %e, "Health check failed");
        ApiError::ServiceUnavailable("database unreachable".to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        database: "ok".to_string(),
    }))
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
