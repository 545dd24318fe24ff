// Job listing endpoints: /jobs
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::database::jobs::{JOB_STATUSES, JOB_STATUS_ACTIVE, JOB_STATUS_CLOSED};
use crate::database::{Job, JobFilter, NewJob, PageRequest};
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult, PageMeta};
use crate::state::AppState;
use crate::validators;

use super::{bad_json, bad_query, non_empty, parse_id};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub apply_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobStatusRequest {
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListJobsQuery {
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub company: Option<String>,
    pub search: Option<String>,
    pub status: Option<String>,
}

/// POST /jobs (admin)
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateJobRequest>, JsonRejection>,
) -> ApiResult<Job> {
    let Json(req) = payload.map_err(bad_json)?;

    validators::validate_create_job(
        req.title.as_deref(),
        req.company.as_deref(),
        req.location.as_deref(),
        req.apply_link.as_deref(),
    )?;

    // Validation guarantees the required fields are present.
    let fields = NewJob::new(
        req.title.as_deref().unwrap_or_default(),
        req.company.as_deref().unwrap_or_default(),
        req.location.as_deref(),
        req.apply_link.as_deref().unwrap_or_default(),
    );

    let job = state.jobs.create(fields).await?;
    tracing::info!(job_id = %job.id, company = %job.company, "Job created");

    Ok(ApiResponse::created("Job created successfully", job))
}

/// GET /jobs
pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<ListJobsQuery>, QueryRejection>,
) -> ApiResult<Vec<Job>> {
    let Query(q) = query.map_err(bad_query)?;

    let page = PageRequest::new(q.page, q.limit);
    let filter = JobFilter {
        status: non_empty(q.status).unwrap_or_else(|| JOB_STATUS_ACTIVE.to_string()),
        company: non_empty(q.company),
        search: non_empty(q.search),
    };

    let (jobs, total) = state.jobs.find(&filter, &page).await?;
    let meta = PageMeta::new(jobs.len(), total, &page);

    Ok(ApiResponse::ok("Jobs fetched successfully", jobs).with_meta(meta))
}

/// GET /jobs/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Job> {
    let id = parse_id(&id, "Invalid job ID")?;
    let job = state
        .jobs
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    Ok(ApiResponse::ok("Job fetched successfully", job))
}

/// PATCH /jobs/:id (admin)
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateJobStatusRequest>, JsonRejection>,
) -> ApiResult<Job> {
    let Json(req) = payload.map_err(bad_json)?;
    let status = validators::validate_update_status(req.status.as_deref(), JOB_STATUSES)?;
    let id = parse_id(&id, "Invalid job ID")?;

    state
        .jobs
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    // Row can vanish between the fetch and the write; treat that as absent.
    let job = state
        .jobs
        .update_status(id, status)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    tracing::info!(job_id = %job.id, new_status = %job.status, "Job status updated");
    Ok(ApiResponse::ok("Job status updated successfully", job))
}

/// DELETE /jobs/:id (admin). Soft delete: transitions status to closed,
/// no-op when already closed. Always 200 with null data.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Value> {
    let id = parse_id(&id, "Invalid job ID")?;
    let job = state
        .jobs
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Job not found"))?;

    if job.status != JOB_STATUS_CLOSED {
        state.jobs.update_status(id, JOB_STATUS_CLOSED).await?;
        tracing::info!(job_id = %job.id, "Job deleted");
    }

    Ok(ApiResponse::ok("Job deleted successfully", Value::Null))
}
