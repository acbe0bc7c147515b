//! Rune page SPA host
//!
//! Serves the built single-page application in history mode: static
//! assets are served as files, every other path gets the app shell with a
//! status decided by the route table.
//!
//! ```text
//!     Browser ──▶ listener ──▶ request id / trace / limits
//!                                   │
//!                   ┌───────────────┼─────────────────┐
//!                   ▼               ▼                 ▼
//!               /api/*        static asset        app shell
//!             (route JSON)    (assets dir)    (200 match / 404 none)
//!                                                     │
//!                                                     ▼
//!                                        routing: table + registry
//! ```

use std::path::PathBuf;

use clap::Parser;

use runepage_router::config;
use runepage_router::lifecycle::startup;
use runepage_router::observability::logging;

#[derive(Parser)]
#[command(name = "runepage-router")]
#[command(version, about = "History-mode host for the rune page app", long_about = None)]
struct Args {
    /// Config file location; created with defaults if missing
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Assets location (overrides `assets.dir`)
    #[arg(long)]
    assets: Option<String>,

    /// Bind address (overrides `listener.bind_address`)
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let overrides = |config: &mut config::AppConfig| {
        if let Some(assets) = args.assets.clone() {
            config.assets.dir = assets;
        }
        if let Some(bind) = args.bind.clone() {
            config.listener.bind_address = bind;
        }
    };

    let Some(config) = config::load_or_create(&args.config, overrides)? else {
        eprintln!(
            "Config file was created at '{}'. Set your config values and restart.",
            args.config.display()
        );
        return Ok(());
    };

    logging::init(&config.observability);

    tracing::info!("runepage-router v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        assets = %config.assets.dir,
        tls = config.listener.tls.enabled,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
