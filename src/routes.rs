//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /s?url=...` - Shorten a URL
//! - `GET /{slug}`    - Resolve a slug to a permanent redirect
//! - `GET /`          - Redirect to the default URL
//! - anything else    - Catch-all, also redirects to the default URL
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api::handlers::{catch_all_handler, resolve_handler, shorten_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Route order matters: `/s` wins over the slug matcher, and the catch-all
/// fallback picks up every path with more than one segment.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/s", get(shorten_handler))
        .route("/{slug}", get(resolve_handler))
        .route("/", get(catch_all_handler))
        .fallback(catch_all_handler)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
