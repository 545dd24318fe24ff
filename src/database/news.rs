use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::{DatabaseError, PageRequest};

pub const NEWS_STATUS_ACTIVE: &str = "active";
pub const NEWS_STATUS_ARCHIVED: &str = "archived";

/// Allowed values for the news status lifecycle. `archived` is terminal and
/// doubles as the soft-delete state.
pub const NEWS_STATUSES: &[&str] = &["active", "archived"];

/// A persisted news item.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub summary: String,
    pub source_link: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a new item, trimmed for storage.
#[derive(Debug, Clone)]
pub struct NewNewsItem {
    pub title: String,
    pub summary: String,
    pub source_link: Option<String>,
}

impl NewNewsItem {
    pub fn new(title: &str, summary: &str, source_link: Option<&str>) -> Self {
        Self {
            title: title.trim().to_string(),
            summary: summary.trim().to_string(),
            source_link: source_link.map(|l| l.trim().to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewsStore {
    pool: PgPool,
}

impl NewsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, fields: NewNewsItem) -> Result<NewsItem, DatabaseError> {
        let item = sqlx::query_as::<_, NewsItem>(
            "INSERT INTO news (title, summary, source_link) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(fields.title)
        .bind(fields.summary)
        .bind(fields.source_link)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<NewsItem>, DatabaseError> {
        let item = sqlx::query_as::<_, NewsItem>("SELECT * FROM news WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(item)
    }

    /// Page of items with the given status, newest first, plus the total
    /// count. News lists filter by status only.
    pub async fn find(
        &self,
        status: &str,
        page: &PageRequest,
    ) -> Result<(Vec<NewsItem>, i64), DatabaseError> {
        let items = sqlx::query_as::<_, NewsItem>(
            "SELECT * FROM news WHERE status = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM news WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;

        Ok((items, total))
    }

    /// Single-statement status write, bumping updated_at. Returns None when
    /// the row no longer exists. Last write wins under concurrency.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<NewsItem>, DatabaseError> {
        let item = sqlx::query_as::<_, NewsItem>(
            "UPDATE news SET status = $2, updated_at = now() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
