//! # TallyKV - A Tiny In-Memory Key-Value Store over HTTP
//!
//! TallyKV keeps string key-value pairs in memory and serves them over
//! plain HTTP. A background task periodically logs how many writes have
//! been accepted and how many keys are stored.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          TallyKV                            │
//! │                                                             │
//! │  ┌─────────────┐    ┌─────────────┐    ┌─────────────────┐  │
//! │  │ axum Server │───>│  Handlers   │───>│      Store      │  │
//! │  │ (Listener)  │    │ (per req.)  │    │ RwLock<entries, │  │
//! │  └─────────────┘    └─────────────┘    │   write_count>  │  │
//! │                                        └────────▲────────┘  │
//! │                                                 │ read      │
//! │                                   ┌─────────────┴────────┐  │
//! │                                   │    StatusReporter    │  │
//! │                                   │ (Background Tokio)   │  │
//! │                                   └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## HTTP Surface
//!
//! - `POST /data` with a JSON object of strings: upsert every pair
//! - `GET /data/<key>`: the raw value, or `404 Key not found`
//! - `DELETE /data/<key>`: remove the key (always succeeds)
//! - `GET /stats`: `Requests: <writes>, Data size: <keys>`
//!
//! ## Quick Start
//!
//! ```ignore
//! use tallykv::server::Server;
//! use tallykv::storage::{ReporterConfig, Store};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(Store::new());
//!     let server = Server::bind("0.0.0.0:8080", store, ReporterConfig::default()).await?;
//!     server.run_until(std::future::pending()).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Overview
//!
//! - [`storage`]: the shared store and the background status reporter
//! - [`http`]: route table, handlers and HTTP error mapping
//! - [`server`]: bind, serve and shut down
//! - [`config`]: command-line options

pub mod config;
pub mod http;
pub mod server;
pub mod storage;

// Re-export commonly used types for convenience
pub use config::Config;
pub use http::{build_router, ApiError};
pub use server::{Server, ServerError};
pub use storage::{ReporterConfig, Snapshot, StatusReporter, Store};

/// The default port TallyKV listens on
pub const DEFAULT_PORT: u16 = 8080;

/// The default host TallyKV binds to
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Version of TallyKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
