use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::error::AppError;
use crate::infrastructure::db::HealthCheck;

/// GET /v1/healthz
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "Status": "ok" })))
}

/// GET /v1/error - always fails; exercises the error envelope
pub async fn error_probe() -> AppError {
    AppError::Internal("Internal Server Error".to_string())
}

/// GET /health/ready
pub async fn health_ready(State(store): State<Arc<dyn HealthCheck>>) -> impl IntoResponse {
    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "database": "connected"
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "database": "disconnected"
                })),
            )
        }
    }
}
