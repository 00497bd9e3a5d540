//! HTTP server initialization and runtime setup.
//!
//! Opens the link store, wires services, serves HTTP until a shutdown signal,
//! then closes the store.

use crate::config::{Config, StoreBackend};
use crate::infrastructure::persistence::{InMemoryLinkRepository, PgLinkRepository};
use crate::routes::app_router;
use crate::state::{AppState, SharedLinkRepository};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Opens the store selected by `config.store_backend`.
///
/// # Errors
///
/// Returns an error if the PostgreSQL connection or migrations fail.
pub async fn open_store(config: &Config) -> Result<SharedLinkRepository> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres store backend")?;
            let repository = PgLinkRepository::open(database_url, &config.pool_settings())
                .await
                .context("Failed to open PostgreSQL store")?;
            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; links are lost on shutdown");
            Ok(Arc::new(InMemoryLinkRepository::new()))
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = open_store(&config).await?;

    let state = AppState::from_config(store.clone(), &config);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let served = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    store.close().await;
    tracing::info!("Store closed, shutdown complete");

    served?;
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
