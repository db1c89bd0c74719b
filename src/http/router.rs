//! Route table for the HTTP surface.

use crate::http::handlers;
use crate::storage::Store;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the application router around a shared store.
pub fn build_router(store: Arc<Store>) -> Router {
    // `/data/*key` never matches an empty remainder, so the empty key
    // gets its own route.
    Router::new()
        .route("/data", post(handlers::upsert))
        .route(
            "/data/",
            get(handlers::get_value).delete(handlers::delete_value),
        )
        .route(
            "/data/*key",
            get(handlers::get_value).delete(handlers::delete_value),
        )
        .route("/stats", get(handlers::stats))
        .with_state(store)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        )
}
