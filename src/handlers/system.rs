// Service banner, health probe, and the unknown-route fallback.
use std::time::Instant;

use axum::extract::State;
use chrono::Utc;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::response::ApiResponse;
use crate::state::AppState;

/// Process start marker. Forced at startup so /health uptime covers the
/// whole process lifetime.
pub static STARTED_AT: Lazy<Instant> = Lazy::new(Instant::now);

/// GET /
pub async fn root() -> ApiResponse<Value> {
    ApiResponse::ok(
        "ScrollJob API is running",
        json!({
            "version": "v1",
            "timestamp": Utc::now().to_rfc3339(),
        }),
    )
}

/// GET /health. Always 200; the database field reports the live ping
/// result.
pub async fn health(State(state): State<AppState>) -> ApiResponse<Value> {
    let database = match state.db.ping().await {
        Ok(()) => "connected",
        Err(e) => {
            tracing::warn!("Health ping failed: {}", e);
            "disconnected"
        }
    };

    ApiResponse::ok(
        "Health check passed",
        json!({
            "uptime": STARTED_AT.elapsed().as_secs(),
            "database": database,
            "timestamp": Utc::now().to_rfc3339(),
        }),
    )
}

/// Fallback for routes nothing matched.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route not found")
}
