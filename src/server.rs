//! HTTP server initialization and runtime setup.
//!
//! Handles the database connection, service wiring, and Axum server lifecycle.

use crate::application::services::AuthService;
use crate::config::Config;
use crate::domain::repositories::DocumentRepository;
use crate::infrastructure::persistence::MongoDocumentRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - MongoDB client, verified with a ping (bounded retries)
/// - Catalog, statistics and auth services
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database stays unreachable after all retries
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let repository = connect_repository(&config).await?;

    let auth_service = AuthService::new(
        &config.jwt_secret,
        config.admin_email.clone(),
        config.token_ttl(),
    );
    let state = AppState::new(repository, auth_service);

    let app = app_router(state, config.request_timeout());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Creates the shared repository and waits until the deployment answers a ping.
///
/// The client is never handed to handlers unless the ping succeeded.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or every ping attempt fails.
pub async fn connect_repository(config: &Config) -> Result<Arc<dyn DocumentRepository>> {
    let repository = MongoDocumentRepository::connect(
        &config.database_uri,
        &config.database_name,
        config.db_connect_timeout(),
    )
    .await
    .context("Invalid MongoDB connection settings")?;

    let strategy = ExponentialBackoff::from_millis(500)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(config.db_connect_retries);

    let probe = &repository;
    Retry::start(strategy, || async move {
        probe.ping().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Database ping failed");
        })
    })
    .await
    .context("Database is unreachable")?;

    tracing::info!(database = %config.database_name, "Connected to database");

    Ok(Arc::new(repository))
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
