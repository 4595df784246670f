//! Handler for slug resolution.

use axum::extract::{Path, State};
use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use regex::Regex;
use std::sync::LazyLock;

use crate::api::handlers::catch_all::redirect_to_default;
use crate::error::AppError;
use crate::state::AppState;

/// Compiled regex for the slug path shape.
static SLUG_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^_?[a-zA-Z0-9]+$").unwrap());

/// Resolves a slug and issues a permanent redirect.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// Paths that do not look like a slug (an optional `_` followed by
/// alphanumerics) are handed to the catch-all instead of hitting storage.
///
/// # Errors
///
/// Returns 404 Not Found for unknown slugs without a configured fallback.
/// Returns 500 when fallback delegation or storage fails.
pub async fn resolve_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !SLUG_SHAPE.is_match(&slug) {
        return redirect_to_default(&state, &format!("/{slug}"));
    }

    let url = state.resolve_service.resolve(&slug).await?;

    moved_permanently(&url)
}

/// Builds a 301 response pointing at `url`.
///
/// Built by hand because [`axum::response::Redirect`] only issues 303, 307
/// and 308.
pub(crate) fn moved_permanently(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::from_str(url)
        .map_err(|e| AppError::store(format!("invalid redirect target '{url}': {e}")))?;

    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response())
}
