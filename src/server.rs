//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, service wiring, and Axum server lifecycle.

use crate::application::services::{ResolveService, ShortenService};
use crate::config::Config;
use crate::infrastructure::fallback::{FallbackClient, HttpFallbackClient};
use crate::infrastructure::persistence::MySqlRedirectRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::mysql::MySqlPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MySQL connection pool
/// - Apply migrations
/// - Fallback HTTP client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let repository = Arc::new(MySqlRedirectRepository::new(Arc::new(pool)));
    let fallback: Arc<dyn FallbackClient> = Arc::new(HttpFallbackClient::new(
        Duration::from_secs(config.fallback_timeout),
    )?);

    let shorten_service = Arc::new(ShortenService::new(
        repository.clone(),
        config.short_url.clone(),
        config.slug_prefix.clone(),
    ));
    let resolve_service = Arc::new(ResolveService::new(
        repository,
        fallback,
        config.fallback_url.clone(),
        config.default_url.clone(),
    ));

    let state = AppState::new(shorten_service, resolve_service);

    let app = app_router(state);

    let addr: SocketAddr = config.http_address.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Running on {addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
