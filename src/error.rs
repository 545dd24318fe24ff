// HTTP API error types. Every failure in the service funnels into ApiError
// and leaves the process as the standard error envelope.
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::config::Environment;
use crate::database::DatabaseError;

/// Closed error taxonomy for the HTTP surface.
#[derive(Debug)]
pub enum ApiError {
    /// 400 - input failed validation; message aggregates every violation.
    Validation(String),
    /// 401 - admin gate rejection.
    Unauthorized(String),
    /// 404 - resource does not exist.
    NotFound(String),
    /// 400 - path id is not a well-formed identifier.
    InvalidIdentifier(String),
    /// 500 - store or infrastructure fault. The payload is the internal
    /// cause and is only shown outside production.
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Internal causes are only exposed in
    /// development mode.
    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InvalidIdentifier(msg) => msg,
            ApiError::Internal(msg) => {
                if Environment::detect().is_production() {
                    "Internal server error"
                } else {
                    msg
                }
            }
        }
    }

    /// Error envelope body.
    pub fn to_json(&self) -> Value {
        json!({
            "status": "error",
            "message": self.message(),
            "data": null,
        })
    }
}

// Constructor helpers, so call sites read as the taxonomy.
impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn invalid_identifier(message: impl Into<String>) -> Self {
        ApiError::InvalidIdentifier(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal(message.into())
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        // Log the real fault; the client sees the normalized form. Stores
        // report absence as Option, so every DatabaseError is infrastructure.
        tracing::error!("Database error: {}", err);
        ApiError::internal(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}
