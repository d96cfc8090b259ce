//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::claims::HealthResponse;
use crate::AppState;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        adapter: None,
        latency_ms: None,
        message: None,
    })
}

/// Readiness check (asks the claims store)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let result = state.claims.health_check().await;

    let (code, status) = if result.is_healthy() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            adapter: Some(result.adapter_id),
            latency_ms: Some(result.latency_ms),
            message: result.message,
        }),
    )
}
