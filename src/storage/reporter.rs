//! Background Status Reporter
//!
//! This module implements a background task that periodically reads a
//! [`Snapshot`] of the store and logs it as a status line:
//!
//! ```text
//! Requests: 12, Data size: 30
//! ```
//!
//! ## Design
//!
//! The reporter runs as a Tokio task and loops over:
//! 1. Wait for the next tick *or* the shutdown signal, whichever fires first
//! 2. On a tick, take a snapshot under the store's read lock
//! 3. Emit the snapshot at INFO level
//!
//! The reporter only ever takes read locks, so it never blocks readers and
//! holds the lock just long enough to copy two numbers.

use crate::storage::{Snapshot, Store};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Default time between two status lines.
pub const DEFAULT_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Configuration for the status reporter.
#[derive(Debug, Clone)]
pub struct ReporterConfig {
    /// Interval between status lines (default: 5s)
    pub interval: Duration,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

/// A handle to the running status reporter.
///
/// When this handle is dropped, the reporter task will be stopped.
#[derive(Debug)]
pub struct StatusReporter {
    /// Sender to signal shutdown
    shutdown_tx: watch::Sender<bool>,

    /// Number of status lines emitted so far
    reports: Arc<AtomicU64>,

    task: Option<JoinHandle<()>>,
}

impl StatusReporter {
    /// Starts the reporter as a background task.
    ///
    /// Must be called from within a Tokio runtime. The first status line is
    /// emitted one full interval after start.
    ///
    /// # Panics
    ///
    /// The spawned task panics if `config.interval` is zero.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use tallykv::storage::{ReporterConfig, StatusReporter, Store};
    /// use std::sync::Arc;
    ///
    /// let store = Arc::new(Store::new());
    /// let reporter = StatusReporter::start(store, ReporterConfig::default());
    ///
    /// // Reporter runs in the background...
    ///
    /// reporter.shutdown().await;
    /// ```
    pub fn start(store: Arc<Store>, config: ReporterConfig) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reports = Arc::new(AtomicU64::new(0));

        let task = tokio::spawn(reporter_loop(
            store,
            config.clone(),
            shutdown_rx,
            Arc::clone(&reports),
        ));

        info!(interval = ?config.interval, "Status reporter started");

        Self {
            shutdown_tx,
            reports,
            task: Some(task),
        }
    }

    /// Signals the reporter to stop.
    ///
    /// Only the first call has an effect. This is called automatically when
    /// the handle is dropped.
    pub fn stop(&self) {
        let first = self.shutdown_tx.send_if_modified(|stopped| {
            if *stopped {
                false
            } else {
                *stopped = true;
                true
            }
        });

        if first {
            info!("Status reporter stopped");
        }
    }

    /// Stops the reporter and waits for its task to exit.
    pub async fn shutdown(mut self) {
        self.stop();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                debug!(error = %e, "Status reporter task ended abnormally");
            }
        }
    }

    /// Returns how many status lines have been emitted.
    pub fn reports_emitted(&self) -> u64 {
        self.reports.load(Ordering::Relaxed)
    }
}

impl Drop for StatusReporter {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The main reporter loop.
async fn reporter_loop(
    store: Arc<Store>,
    config: ReporterConfig,
    mut shutdown_rx: watch::Receiver<bool>,
    reports: Arc<AtomicU64>,
) {
    let mut ticker = time::interval_at(Instant::now() + config.interval, config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // Wait for the next tick or shutdown signal
        tokio::select! {
            _ = ticker.tick() => {}
            result = shutdown_rx.changed() => {
                if result.is_err() || *shutdown_rx.borrow() {
                    debug!("Status reporter received shutdown signal");
                    return;
                }
                // Only ticks produce a status line
                continue;
            }
        }

        report(&store.snapshot());
        reports.fetch_add(1, Ordering::Relaxed);
    }
}

fn report(snapshot: &Snapshot) {
    info!(
        write_count = snapshot.write_count,
        size = snapshot.size,
        "{}",
        snapshot
    );
}
