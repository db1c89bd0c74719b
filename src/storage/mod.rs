//! Storage Module
//!
//! This module provides the shared state of TallyKV: a thread-safe
//! key-value [`Store`] and the background [`StatusReporter`] that
//! periodically logs its size.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Store                     │
//! │     RwLock { entries, write_count }         │
//! └─────────────────────────────────────────────┘
//!          ▲ read/write              ▲ read
//!          │                         │
//!   ┌──────┴──────┐       ┌──────────┴──────────┐
//!   │  Handlers   │       │   StatusReporter    │
//!   │ (per req.)  │       │ (Background Tokio)  │
//!   └─────────────┘       └─────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use tallykv::storage::Store;
//!
//! let store = Store::new();
//! store.upsert(HashMap::from([
//!     ("a".to_string(), "1".to_string()),
//!     ("b".to_string(), "2".to_string()),
//! ]));
//!
//! assert_eq!(store.get("a").as_deref(), Some("1"));
//! assert_eq!(store.snapshot().to_string(), "Requests: 1, Data size: 2");
//! ```

pub mod engine;
pub mod reporter;

// Re-export commonly used types
pub use engine::{Snapshot, Store};
pub use reporter::{ReporterConfig, StatusReporter, DEFAULT_REPORT_INTERVAL};
