//! VersoZap Admin API Server
//!
//! Run with: cargo run
//!
//! # Configuration
//!
//! Loaded from the first config.toml found (user config dir,
//! /etc/versozap-admin, working directory), then overridden by
//! environment variables:
//! - `VERSOZAP_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `VERSOZAP_API_PORT`: Port to listen on (default: 8090)
//! - `VERSOZAP_BACKEND_URL`: VersoZap backend URL
//! - `VERSOZAP_LOG_LEVEL` / `VERSOZAP_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use versozap_admin::api::{serve, ApiConfig, AppState};
use versozap_admin::config::{generate_default_config, Config};
use versozap_admin::upstream::{BackendClient, BackendConfig};

#[derive(Parser)]
#[command(name = "versozap-admin")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Backend service for the VersoZap administrative dashboard")]
struct Cli {
    /// Path to a config file (overrides the default lookup chain)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the API server (default)
    Serve,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => std::fs::write(path, content)?,
            None => print!("{}", content),
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_tracing(&config);

    tracing::info!(
        "Starting VersoZap admin API v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Backend URL: {}", config.backend.url);

    let backend = Arc::new(BackendClient::new(BackendConfig {
        base_url: config.backend.url.clone(),
        request_timeout_ms: config.backend.request_timeout_ms,
    }));

    // A down backend only degrades the service (sample data is served), so
    // startup just reports it.
    match backend.health_check().await {
        Ok(_) => tracing::info!("Backend connection verified"),
        Err(e) => tracing::warn!("Backend not available: {} (serving sample data)", e),
    }

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        enable_export: config.api.enable_export,
    };

    let state = AppState::new(backend, api_config.clone());

    tracing::info!("Starting server on {}", api_config.addr());
    serve(state, &api_config).await?;

    tracing::info!("VersoZap admin API stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "versozap_admin={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
