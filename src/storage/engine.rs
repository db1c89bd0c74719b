//! Thread-Safe Key-Value Store
//!
//! This module implements the shared state behind TallyKV: a flat
//! `String -> String` map plus a counter of accepted bulk writes.
//!
//! ## Concurrency Model
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                   Store                     │
//! │  ┌───────────────────────────────────────┐  │
//! │  │               RwLock                  │  │
//! │  │   entries: HashMap<String, String>    │  │
//! │  │   write_count: u64                    │  │
//! │  └───────────────────────────────────────┘  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Both fields live behind the same lock, so a [`Snapshot`] always pairs a
//! counter value with the map size from the same instant. Readers (`get`,
//! `snapshot`) share the lock; writers (`upsert`, `delete`) hold it
//! exclusively. Nothing inside a critical section performs I/O.

use std::collections::HashMap;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Everything protected by the store's lock.
#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, String>,
    write_count: u64,
}

/// A consistent point-in-time view of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    /// Number of bulk upserts accepted so far
    pub write_count: u64,
    /// Number of keys currently stored
    pub size: usize,
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Requests: {}, Data size: {}", self.write_count, self.size)
    }
}

/// The in-memory key-value store.
///
/// Wrap it in an `Arc` and hand a clone to every request handler and to the
/// status reporter.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use tallykv::storage::Store;
///
/// let store = Store::new();
/// store.upsert(HashMap::from([("name".to_string(), "Ariz".to_string())]));
///
/// assert_eq!(store.get("name").as_deref(), Some("Ariz"));
/// assert_eq!(store.snapshot().write_count, 1);
/// ```
#[derive(Debug, Default)]
pub struct Store {
    inner: RwLock<Inner>,
}

impl Store {
    /// Creates an empty store with a zero write counter.
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section is plain map assignment, so a panic elsewhere
    // can't leave the data half-written. Recover the guard instead of
    // propagating the poison.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Merges `pairs` into the store, overwriting existing keys, and bumps
    /// the write counter by exactly one.
    ///
    /// An empty map is accepted and still counts as a write.
    pub fn upsert(&self, pairs: HashMap<String, String>) {
        let mut inner = self.write();
        inner.entries.extend(pairs);
        inner.write_count += 1;
    }

    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read().entries.get(key).cloned()
    }

    /// Removes `key` from the store.
    ///
    /// Returns `true` if the key was present. Deleting a missing key is not
    /// an error and leaves the store unchanged.
    pub fn delete(&self, key: &str) -> bool {
        self.write().entries.remove(key).is_some()
    }

    /// Reads the write counter and entry count under one lock acquisition.
    pub fn snapshot(&self) -> Snapshot {
        let inner = self.read();
        Snapshot {
            write_count: inner.write_count,
            size: inner.entries.len(),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().entries.is_empty()
    }
}
