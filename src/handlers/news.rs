// News item endpoints: /news
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::database::news::{NEWS_STATUSES, NEWS_STATUS_ACTIVE, NEWS_STATUS_ARCHIVED};
use crate::database::{NewNewsItem, NewsItem, PageRequest};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult, PageMeta};
use crate::state::AppState;
use crate::validators;

use super::{bad_json, bad_query, non_empty, parse_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewsRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub source_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNewsStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListNewsQuery {
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub status: Option<String>,
}

/// POST /news (admin)
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateNewsRequest>, JsonRejection>,
) -> ApiResult<NewsItem> {
    let Json(req) = payload.map_err(bad_json)?;

    validators::validate_create_news(
        req.title.as_deref(),
        req.summary.as_deref(),
        req.source_link.as_deref(),
    )?;

    // Validation guarantees the required fields are present.
    let fields = NewNewsItem::new(
        req.title.as_deref().unwrap_or_default(),
        req.summary.as_deref().unwrap_or_default(),
        req.source_link.as_deref(),
    );

    let item = state.news.create(fields).await?;
    tracing::info!(news_id = %item.id, "News created");

    Ok(ApiResponse::created("News created successfully", item))
}

/// GET /news
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListNewsQuery>, QueryRejection>,
) -> ApiResult<Vec<NewsItem>> {
    let Query(q) = query.map_err(bad_query)?;

    let page = PageRequest::new(q.page, q.limit);
    let status = non_empty(q.status).unwrap_or_else(|| NEWS_STATUS_ACTIVE.to_string());

    let (items, total) = state.news.find(&status, &page).await?;
    let meta = PageMeta::new(items.len(), total, &page);

    Ok(ApiResponse::ok("News fetched successfully", items).with_meta(meta))
}

/// GET /news/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<NewsItem> {
    let id = parse_id(&id, "Invalid news ID")?;
    let item = state
        .news
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("News item not found"))?;

    Ok(ApiResponse::ok("News fetched successfully", item))
}

/// PATCH /news/:id (admin)
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNewsStatusRequest>, JsonRejection>,
) -> ApiResult<NewsItem> {
    let Json(req) = payload.map_err(bad_json)?;
    let status = validators::validate_update_status(req.status.as_deref(), NEWS_STATUSES)?;
    let id = parse_id(&id, "Invalid news ID")?;

    state
        .news
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("News item not found"))?;

    // Row can vanish between the fetch and the write; treat that as absent.
    let item = state
        .news
        .update_status(id, status)
        .await?
        .ok_or_else(|| ApiError::not_found("News item not found"))?;

    tracing::info!(news_id = %item.id, new_status = %item.status, "News status updated");
    Ok(ApiResponse::ok("News status updated successfully", item))
}

/// DELETE /news/:id (admin). Soft delete: transitions status to archived,
/// no-op when already archived. Always 200 with null data.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_id(&id, "Invalid news ID")?;
    let item = state
        .news
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("News item not found"))?;

    if item.status != NEWS_STATUS_ARCHIVED {
        state.news.update_status(id, NEWS_STATUS_ARCHIVED).await?;
        tracing::info!(news_id = %item.id, "News deleted");
    }

    Ok(ApiResponse::ok("News deleted successfully", Value::Null))
}
