//! Catch-all handler for unmatched requests.

use axum::extract::State;
use axum::http::Uri;
use axum::response::Response;

use crate::api::handlers::resolve::moved_permanently;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects any unmatched request to the configured default URL.
///
/// # Endpoint
///
/// `GET /` and every path no other route matched.
///
/// # Errors
///
/// Returns 404 Not Found when no default URL is configured.
pub async fn catch_all_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    redirect_to_default(&state, uri.path())
}

/// Issues the default-URL redirect for `path`, or a 404 when unset.
pub(crate) fn redirect_to_default(state: &AppState, path: &str) -> Result<Response, AppError> {
    let url = state.resolve_service.catch_all()?;
    tracing::info!("{path} -> {url}");

    moved_permanently(url)
}
