//! Handler for the shorten endpoint.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for [`shorten_handler`].
#[derive(Debug, Deserialize)]
pub struct ShortenParams {
    /// Defaults to empty so a missing parameter becomes a validation error
    /// instead of an extractor rejection.
    #[serde(default)]
    pub url: String,
}

/// Shortens a URL passed as a query parameter.
///
/// # Endpoint
///
/// `GET /s?url=<long-url>`
///
/// # Response
///
/// The plain-text short URL. `201 Created` for a fresh slug, `200 OK` when
/// the exact URL was shortened before and its slug is reused.
///
/// # Errors
///
/// Returns 400 Bad Request when the `url` parameter is missing or empty.
/// Returns 500 when no public base URL is configured or storage fails.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(params): Query<ShortenParams>,
) -> Result<(StatusCode, String), AppError> {
    let outcome = state.shorten_service.shorten(&params.url).await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, outcome.short_url))
}
