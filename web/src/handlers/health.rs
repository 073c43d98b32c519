//! Health check endpoint.
//!
//! Used by load balancers and monitoring systems to verify the service is
//! running.

use axum::{Json, http::StatusCode};
use serde_json::{Value, json};

/// Liveness check.
///
/// Returns 200 OK without touching the tab registry or the translator.
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "ok"
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}
