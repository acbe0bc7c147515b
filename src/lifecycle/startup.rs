//! Startup orchestration.
//!
//! # Responsibilities
//! - Build the navigator (route table + registry) from validated config
//! - Load the app shell
//! - Start metrics, then bind the listener and serve
//! - Drive graceful shutdown on signal
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Subsystems initialize in order, not concurrently
//! - Listener starts last (traffic only when ready)

use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::http::{AppShell, AppState, HttpServer};
use crate::lifecycle::signals::wait_for_shutdown_signal;
use crate::lifecycle::Shutdown;
use crate::observability::metrics;
use crate::routing::{BuildError, Navigator};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("route table: {0}")]
    Routes(#[from] BuildError),

    #[error("cannot read app shell at {}: {source}", .path.display())]
    AppShell {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid address: {0}")]
    Address(#[from] AddrParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("server task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Run the host until a shutdown signal arrives.
pub async fn run(config: AppConfig) -> Result<(), StartupError> {
    let navigator = Navigator::from_config(&config)?;
    tracing::info!(
        routes = navigator.table().len(),
        components = navigator.registry().len(),
        "Route table ready"
    );

    let shell = AppShell::load(&config.assets)
        .await
        .map_err(|source| StartupError::AppShell {
            path: AppShell::path(&config.assets),
            source,
        })?;

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?);
    }

    let addr: SocketAddr = config.listener.bind_address.parse()?;
    let grace = Duration::from_secs(config.timeouts.shutdown_grace_secs);
    let tls = config.listener.tls.enabled;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, AppState::new(navigator, shell));

    let mut task = if tls {
        tokio::spawn(server.run_tls(addr, shutdown.listener()))
    } else {
        let listener = TcpListener::bind(addr).await?;
        tracing::info!(address = %listener.local_addr()?, "Listening for connections");
        tokio::spawn(server.run(listener, shutdown.listener()))
    };

    tokio::select! {
        joined = &mut task => return Ok(joined??),
        _ = wait_for_shutdown_signal() => {}
    }

    shutdown.trigger();
    match tokio::time::timeout(grace, task).await {
        Ok(joined) => joined??,
        Err(_) => tracing::warn!(grace_secs = grace.as_secs(), "Shutdown grace period elapsed"),
    }

    Ok(())
}
