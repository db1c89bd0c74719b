//! Server Lifecycle
//!
//! Binds the listener, starts the status reporter, and serves the router
//! until a shutdown future resolves. Binding happens separately from
//! serving so callers learn about a taken port before anything else starts.

use crate::http::build_router;
use crate::storage::{ReporterConfig, StatusReporter, Store};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Errors that end the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listening address could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The accept loop failed
    #[error("server error: {0}")]
    Serve(#[from] io::Error),
}

/// A bound, not yet running server.
#[derive(Debug)]
pub struct Server {
    listener: TcpListener,
    store: Arc<Store>,
    reporter_config: ReporterConfig,
}

impl Server {
    /// Binds `addr`. Fails immediately if the address is unavailable.
    pub async fn bind(
        addr: &str,
        store: Arc<Store>,
        reporter_config: ReporterConfig,
    ) -> Result<Self, ServerError> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.to_string(),
                source,
            })?;

        Ok(Self {
            listener,
            store,
            reporter_config,
        })
    }

    /// The address actually bound (useful with port 0).
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// The store this server will serve.
    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Serves requests until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish, then the reporter is
    /// stopped and awaited.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let reporter = StatusReporter::start(Arc::clone(&self.store), self.reporter_config);
        let app = build_router(Arc::clone(&self.store));

        if let Ok(addr) = self.listener.local_addr() {
            info!(%addr, "Listening for HTTP connections");
        }

        let result = axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        reporter.shutdown().await;
        result.map_err(ServerError::from)
    }
}
