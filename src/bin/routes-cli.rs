use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use runepage_router::config::load_or_default;
use runepage_router::observability::logging;
use runepage_router::routing::router::RouteSummary;
use runepage_router::{Navigator, Params, RouteError};

#[derive(Parser)]
#[command(name = "routes-cli")]
#[command(about = "Inspect the rune page route table", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List routes in precedence order
    List,
    /// Show what a path mounts
    Resolve { path: String },
    /// Build the path of a named route
    Reverse {
        name: String,
        /// Route parameters as key=value
        #[arg(value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Run one subcommand against `navigator`, returning what to print.
fn execute(navigator: &Navigator, command: Commands) -> Result<String, CliError> {
    match command {
        Commands::List => {
            let routes: Vec<RouteSummary> = navigator
                .table()
                .routes()
                .iter()
                .map(|r| r.summary())
                .collect();
            Ok(serde_json::to_string_pretty(&routes)?)
        }
        Commands::Resolve { path } => {
            let mount = navigator.navigate(&path)?;
            Ok(serde_json::to_string_pretty(&mount)?)
        }
        Commands::Reverse { name, params } => {
            let params: Params = params.into_iter().collect();
            navigator.href(&name, &params).map_err(|e| {
                tracing::error!(error = %e, "Reverse lookup failed");
                e.into()
            })
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.observability);

    let navigator = match Navigator::from_config(&config) {
        Ok(navigator) => navigator,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match execute(&navigator, cli.command) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
