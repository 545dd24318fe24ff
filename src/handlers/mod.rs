pub mod jobs;
pub mod news;
pub mod system;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use uuid::Uuid;

use crate::error::ApiError;

/// Parses a path id. Malformed input is a client error with the resource's
/// message, never a 500.
pub(crate) fn parse_id(raw: &str, invalid_message: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::invalid_identifier(invalid_message))
}

/// Maps a body decode rejection into the standard envelope.
pub(crate) fn bad_json(rejection: JsonRejection) -> ApiError {
    ApiError::validation(format!("Invalid JSON body: {}", rejection.body_text()))
}

/// Maps a query string rejection into the standard envelope.
pub(crate) fn bad_query(rejection: QueryRejection) -> ApiError {
    ApiError::validation(format!("Invalid query string: {}", rejection.body_text()))
}

/// Empty query params behave as absent.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_uuid() {
        assert!(parse_id("7b3f9f2e-8f5e-4f7d-9f6a-2b1c3d4e5f60", "Invalid job ID").is_ok());
    }

    #[test]
    fn parse_id_rejects_garbage() {
        let err = parse_id("not-a-uuid", "Invalid job ID").unwrap_err();
        assert_eq!(err.message(), "Invalid job ID");
    }

    #[test]
    fn non_empty_filters_blank() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".into())), Some("x".into()));
        assert_eq!(non_empty(None), None);
    }
}
