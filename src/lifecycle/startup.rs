//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration, load the mapping snapshot
//! - Build the path index before any traffic is accepted
//! - Bind the listener (plain or TLS) and serve until shutdown
//!
//! # Design Decisions
//! - Strictly sequential, single-threaded startup
//! - Fail fast: any startup error is fatal
//! - The snapshot is dropped once the index is built

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum_server::Handle;
use thiserror::Error;

use crate::config::{load_server_config, ConfigError, ServerConfig};
use crate::http::{build_router, AppState};
use crate::lifecycle::shutdown;
use crate::mapping::{load_mapping_snapshot, MappingError};
use crate::net::tls::build_rustls_config;
use crate::routing::PathIndex;

/// Fatal startup failures. None of these are retried: they represent
/// operator or input errors requiring a fix and a restart.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load server config: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load mapping data: {0}")]
    Mapping(#[from] MappingError),

    #[error("invalid listen address {addr}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to load ssl certificate: {0}")]
    Tls(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the full service lifecycle: ordered startup, serve, graceful
/// shutdown on SIGINT/SIGTERM.
pub async fn run(config_path: &Path, mapping_path: &Path) -> Result<(), StartupError> {
    let config = load_server_config(config_path)?;
    tracing::info!(path = %config_path.display(), "loaded server configuration");

    let snapshot = load_mapping_snapshot(mapping_path)?;
    tracing::info!(
        path = %mapping_path.display(),
        mappings = snapshot.mappings.len(),
        generated_at = %snapshot.generated_at,
        "loaded mapping snapshot"
    );

    let index = PathIndex::build(&snapshot);
    tracing::info!(entries = index.len(), "built path index");
    drop(snapshot);

    let handle = Handle::new();
    tokio::spawn(shutdown::watch_signals(handle.clone()));

    serve(config, index, handle).await
}

/// Bind the listener and serve requests until the handle shuts down.
///
/// Split out from [`run`] so tests can drive a server with their own
/// shutdown handle instead of OS signals.
pub async fn serve(
    config: ServerConfig,
    index: PathIndex,
    handle: Handle,
) -> Result<(), StartupError> {
    let addr_str = format!("{}:{}", config.host, config.port);
    let addr: SocketAddr = addr_str.parse().map_err(|source| StartupError::Address {
        addr: addr_str.clone(),
        source,
    })?;

    let state = AppState::new(Arc::new(index), &config);
    let app = build_router(state, &config.timeouts);

    if config.ssl.enabled {
        let tls = build_rustls_config(&config.ssl.cert, &config.ssl.key)
            .await
            .map_err(StartupError::Tls)?;

        tracing::info!(address = %addr, "starting HTTPS server");
        axum_server::bind_rustls(addr, tls)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
    } else {
        tracing::info!(address = %addr, "starting HTTP server");
        axum_server::bind(addr)
            .handle(handle)
            .serve(app.into_make_service())
            .await?;
    }

    tracing::info!("server stopped");
    Ok(())
}
