//! HTTP API server for folio-lookup.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod branding;
mod handlers;
mod query_types;
mod response_types;
mod viewer;

use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use folio_lookup_service::LookupService;

pub use branding::Branding;
pub use response_types::VersionResponse;

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Load/filter/render pipeline with its table cache
    pub lookup: Arc<LookupService>,
    /// Optional logo read at startup
    pub branding: Branding,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(viewer::serve_viewer))
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/locations", get(handlers::locations::list_locations))
        .route("/api/branding", get(handlers::locations::branding))
        .route("/logo", get(handlers::locations::logo))
        .route("/api/search", get(handlers::search::search))
        .route("/api/barcode", get(handlers::barcode::barcode))
        .route("/api/cache/invalidate", post(handlers::cache::invalidate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
