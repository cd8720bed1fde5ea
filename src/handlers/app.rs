use axum::{response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for liveness probes.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "pharmacist-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
