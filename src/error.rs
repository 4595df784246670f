//! Application error taxonomy and HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Application-level errors produced by the workflows.
///
/// Handlers return these directly; the [`IntoResponse`] impl translates
/// them into plain-text HTTP responses. 500-class errors carry their
/// description as the body for operator debugging, while 400/404 responses
/// have empty bodies and leak nothing.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad or missing client input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Unknown slug or unmatched route with no configured fallback/default.
    #[error("not found")]
    NotFound,

    /// Unique-key violation from the store. Slug generation treats this as
    /// a recoverable collision; outside generation it is a store failure.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A required setting is absent at call time.
    #[error("configuration error: {0}")]
    Config(String),

    /// Slug generation ran out of candidates.
    #[error("slug generation failed: {0}")]
    Generation(String),

    /// The fallback delegate was unreachable or returned no usable redirect.
    #[error("fallback delegation failed: {0}")]
    Fallback(String),

    /// Persistence layer failure.
    #[error("store error: {0}")]
    Store(String),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation(message.into())
    }

    pub fn fallback(message: impl Into<String>) -> Self {
        Self::Fallback(message.into())
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict(_)
            | Self::Config(_)
            | Self::Generation(_)
            | Self::Fallback(_)
            | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("{self}");
            (status, self.to_string()).into_response()
        } else {
            tracing::warn!("{self}");
            status.into_response()
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return Self::Conflict(db.message().to_string());
        }

        Self::Store(e.to_string())
    }
}
