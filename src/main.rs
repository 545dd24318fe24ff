use scrolljob_api::config::AppConfig;
use scrolljob_api::handlers::system;
use scrolljob_api::routes::create_router;
use scrolljob_api::state::AppState;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, ADMIN_KEY, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("FATAL: {}", e);
            std::process::exit(1);
        }
    };

    if !config.admin_gate_enabled() {
        tracing::warn!("ADMIN_KEY is not set. Admin routes will be unprotected.");
    }

    // Anchor the uptime clock before serving.
    once_cell::sync::Lazy::force(&system::STARTED_AT);

    let state = match AppState::new(config.clone()).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("FATAL: database startup failed: {}", e);
            std::process::exit(1);
        }
    };

    let app = create_router(state.clone());

    let bind_addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("FATAL: failed to bind {}: {}", bind_addr, e);
            std::process::exit(1);
        }
    };

    tracing::info!("ScrollJob API running on port {}", config.port);
    tracing::info!("Environment: {}", config.environment.as_str());
    tracing::info!(
        "Auth: {}",
        if config.admin_gate_enabled() { "enabled" } else { "disabled" }
    );
    if config.allowed_origins.is_empty() {
        tracing::info!("CORS: open");
    } else {
        tracing::info!("CORS: {}", config.allowed_origins.join(", "));
    }

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
    }

    state.db.close().await;
    tracing::info!("Database connections closed");
}

/// Resolves on ctrl-c or SIGTERM, letting in-flight requests drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining in-flight requests");
}
