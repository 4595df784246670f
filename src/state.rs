//! Shared application state for HTTP handlers.

use std::sync::Arc;

use crate::application::services::{ResolveService, ShortenService};

/// State handed to every handler via the axum `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
}

impl AppState {
    /// Creates the shared state from the wired services.
    pub fn new(shorten_service: Arc<ShortenService>, resolve_service: Arc<ResolveService>) -> Self {
        Self {
            shorten_service,
            resolve_service,
        }
    }
}
