use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{escape_like, DatabaseError, PageRequest};

pub const JOB_STATUS_ACTIVE: &str = "active";
pub const JOB_STATUS_CLOSED: &str = "closed";

/// Allowed values for the job status lifecycle. `closed` is terminal and
/// doubles as the soft-delete state.
pub const JOB_STATUSES: &[&str] = &["active", "expired", "closed"];

/// A persisted job listing.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: String,
    pub apply_link: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new listing, normalized for storage: values are trimmed,
/// company is lowercased, and location falls back to "Remote" when absent.
#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub apply_link: String,
}

impl NewJob {
    pub fn new(title: &str, company: &str, location: Option<&str>, apply_link: &str) -> Self {
        Self {
            title: title.trim().to_string(),
            company: company.trim().to_lowercase(),
            location: location
                .map(|l| l.trim().to_string())
                .unwrap_or_else(|| "Remote".to_string()),
            apply_link: apply_link.trim().to_string(),
        }
    }
}

/// List filter. Status always applies; company is a case-insensitive
/// substring; search goes through the text index over title + company.
#[derive(Debug, Clone)]
pub struct JobFilter {
    pub status: String,
    pub company: Option<String>,
    pub search: Option<String>,
}

/// Builds the WHERE clause with numbered placeholders and the matching bind
/// values, in order.
fn build_where(filter: &JobFilter) -> (String, Vec<String>) {
    let mut clause = String::from("status = $1");
    let mut params = vec![filter.status.clone()];

    if let Some(company) = &filter.company {
        params.push(format!("%{}%", escape_like(company)));
        clause.push_str(&format!(" AND company ILIKE ${}", params.len()));
    }

    if let Some(search) = &filter.search {
        params.push(search.clone());
        clause.push_str(&format!(
            " AND to_tsvector('english', title || ' ' || company) @@ plainto_tsquery('english', ${})",
            params.len()
        ));
    }

    (clause, params)
}

#[derive(Debug, Clone)]
pub struct JobStore {
    pool: PgPool,
}

impl JobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a normalized listing. Id, status and timestamps come from
    /// column defaults.
    pub async fn create(&self, fields: NewJob) -> Result<Job, DatabaseError> {
        let job = sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (title, company, location, apply_link) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(fields.title)
        .bind(fields.company)
        .bind(fields.location)
        .bind(fields.apply_link)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, DatabaseError> {
        let job = sqlx::query_as::<_, Job>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(job)
    }

    /// Page of listings sorted by newest first, plus the total count for the
    /// same filter.
    pub async fn find(
        &self,
        filter: &JobFilter,
        page: &PageRequest,
    ) -> Result<(Vec<Job>, i64), DatabaseError> {
        let (clause, params) = build_where(filter);

        let list_sql = format!(
            "SELECT * FROM jobs WHERE {} ORDER BY created_at DESC LIMIT ${} OFFSET ${}",
            clause,
            params.len() + 1,
            params.len() + 2
        );
        let mut list_query = sqlx::query_as::<_, Job>(&list_sql);
        for param in params.iter().cloned() {
            list_query = list_query.bind(param);
        }
        let jobs = list_query
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM jobs WHERE {}", clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for param in params {
            count_query = count_query.bind(param);
        }
        let total = count_query.fetch_one(&self.pool).await?;

        Ok((jobs, total))
    }

    /// Single-statement status write, bumping updated_at. Returns None when
    /// the row no longer exists. Last write wins under concurrency.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<Job>, DatabaseError> {
        let job = sqlx::query_as::<_, Job>(
            "UPDATE jobs SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(job)
    }
}
