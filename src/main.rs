//! TallyKV - A Tiny In-Memory Key-Value Store over HTTP
//!
//! This is the main entry point for the TallyKV server.
//! It parses options, sets up logging, and serves until Ctrl+C.

use clap::Parser;
use std::sync::Arc;
use tallykv::{Config, Server, Store};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

/// Resolves once Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        // Without a handler we can't shut down gracefully; keep serving.
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server...");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logging();

    info!(
        version = tallykv::VERSION,
        report_interval_secs = config.report_interval_secs,
        "Starting TallyKV"
    );

    // Create the store (shared across all requests and the reporter)
    let store = Arc::new(Store::new());

    // A taken port ends the process here with a non-zero exit code
    let server = Server::bind(&config.bind_address(), store, config.reporter_config()).await?;

    server.run_until(shutdown_signal()).await?;

    info!("Server shutdown complete");
    Ok(())
}
