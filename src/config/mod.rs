use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Reads `APP_ENV` directly. Used where config is not in scope, such as
    /// error rendering.
    pub fn detect() -> Self {
        env::var("APP_ENV").as_deref().map(Environment::from).unwrap_or(Environment::Development)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        match value {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

/// Process configuration, read once at startup and carried in application
/// state. `DATABASE_URL` is the only required variable; everything else has a
/// workable default.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// Shared admin secret for mutating routes. `None` (or empty) means the
    /// gate is open and every request passes.
    pub admin_key: Option<String>,
    /// Allowed CORS origins. Empty means allow any origin.
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let mut config = Self {
            environment: Environment::detect(),
            port: 5000,
            database_url,
            database_max_connections: 10,
            admin_key: None,
            allowed_origins: Vec::new(),
        };

        if let Ok(v) = env::var("PORT") {
            config.port = v.parse().unwrap_or(config.port);
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            config.database_max_connections = v.parse().unwrap_or(config.database_max_connections);
        }
        if let Ok(v) = env::var("ADMIN_KEY") {
            if !v.is_empty() {
                config.admin_key = Some(v);
            }
        }
        if let Ok(v) = env::var("CORS_ORIGINS") {
            config.allowed_origins = parse_origins(&v);
        }

        Ok(config)
    }

    pub fn admin_gate_enabled(&self) -> bool {
        self.admin_key.is_some()
    }
}

/// Splits a comma-separated origin list, trimming entries and dropping blanks.
fn parse_origins(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}
