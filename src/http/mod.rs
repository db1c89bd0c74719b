//! HTTP Module
//!
//! This module exposes the [`Store`](crate::storage::Store) over plain
//! HTTP. Each request is served by its own Tokio task; handlers never hold
//! the store lock across an `.await`.
//!
//! ## Request Flow
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ axum Router  │───>│   Handler    │───>│    Store     │
//! │ + TraceLayer │    │ parse/adapt  │    │ RwLock'd map │
//! └──────────────┘    └──────┬───────┘    └──────────────┘
//!                            │
//!                            ▼
//!                    text/plain response
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use tallykv::http::build_router;
//! use tallykv::storage::Store;
//! use std::sync::Arc;
//!
//! let app = build_router(Arc::new(Store::new()));
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod router;

// Re-export commonly used types
pub use error::ApiError;
pub use handlers::{key_from_path, KEY_PREFIX};
pub use router::build_router;
