//! Command-line configuration.

use crate::storage::ReporterConfig;
use crate::{DEFAULT_HOST, DEFAULT_PORT};
use clap::Parser;
use std::time::Duration;

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "tallykv", version, about = "In-memory key-value store over HTTP")]
pub struct Config {
    /// Host to bind to
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Seconds between two status lines
    #[arg(
        long = "report-interval",
        value_name = "SECS",
        default_value_t = 5,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub report_interval_secs: u64,
}

impl Config {
    /// Returns the bind address as a string
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn reporter_config(&self) -> ReporterConfig {
        ReporterConfig {
            interval: Duration::from_secs(self.report_interval_secs),
        }
    }
}
