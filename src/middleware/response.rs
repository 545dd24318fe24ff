use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::database::PageRequest;

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    /// Records in this page.
    pub results: usize,
    /// Records matching the filter across all pages.
    pub total: i64,
    pub page: i64,
    /// ceil(total / limit); 0 when nothing matches.
    pub pages: i64,
}

impl PageMeta {
    pub fn new(results: usize, total: i64, page: &PageRequest) -> Self {
        Self {
            results,
            total,
            page: page.page,
            // Rounds up without overflowing when limit comes in huge.
            pages: total.saturating_add(page.limit - 1) / page.limit,
        }
    }
}

/// Wrapper that renders the success envelope:
/// `{"status":"success","message":...,"data":...}` plus `meta` on lists.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub message: String,
    pub data: T,
    pub meta: Option<PageMeta>,
    pub status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
            meta: None,
            status_code: StatusCode::OK,
        }
    }

    /// 201 Created response.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            ..Self::ok(message, data)
        }
    }

    /// Attach pagination meta (list endpoints).
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let data = match serde_json::to_value(&self.data) {
            Ok(value) => value,
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                return crate::error::ApiError::internal("Failed to serialize response data")
                    .into_response();
            }
        };

        let mut envelope = json!({
            "status": "success",
            "message": self.message,
            "data": data,
        });
        if let Some(meta) = &self.meta {
            envelope["meta"] = json!(meta);
        }

        (self.status_code, Json(envelope)).into_response()
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
