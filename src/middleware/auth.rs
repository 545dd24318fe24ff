use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the shared admin secret.
pub const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Admin gate for mutating routes. Compares `x-admin-key` against the
/// configured secret. When no secret is configured the gate is open and
/// every request passes; startup logs that condition.
pub async fn require_admin_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.config.admin_key.as_deref() {
        check_admin_key(&headers, expected)?;
    }
    Ok(next.run(request).await)
}

fn check_admin_key(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    let provided = headers.get(ADMIN_KEY_HEADER).and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected => Ok(()),
        _ => Err(ApiError::unauthorized("Unauthorized - Invalid or missing admin key")),
    }
}
