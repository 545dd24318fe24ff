use crate::config::AppConfig;
use crate::database::{Database, DatabaseError, JobStore, NewsStore};

/// Shared application state, cloned per request by axum.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: Database,
    pub jobs: JobStore,
    pub news: NewsStore,
}

impl AppState {
    /// Connect to the database, apply migrations, and build the stores.
    pub async fn new(config: AppConfig) -> Result<Self, DatabaseError> {
        let db = Database::connect(&config.database_url, config.database_max_connections).await?;
        db.migrate().await?;
        Ok(Self::with_database(config, db))
    }

    /// Assemble state around an existing handle. Router tests use this with
    /// a lazy pool.
    pub fn with_database(config: AppConfig, db: Database) -> Self {
        let jobs = JobStore::new(db.pool());
        let news = NewsStore::new(db.pool());
        Self {
            config,
            db,
            jobs,
            news,
        }
    }
}
