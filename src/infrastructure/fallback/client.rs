//! Fallback client trait.

use crate::error::AppError;
use async_trait::async_trait;

/// Trait for asking an upstream shortener where a slug points.
///
/// When a slug is unknown locally the resolve workflow may delegate to a
/// configured upstream. The client performs a single request and reports
/// the redirect target the upstream advertises.
///
/// # Implementations
///
/// - [`crate::infrastructure::fallback::HttpFallbackClient`] - reqwest-based implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FallbackClient: Send + Sync {
    /// Fetches `url` and returns the absolute redirect target from the
    /// response's `Location` header.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Fallback`] when the upstream is unreachable or
    /// responds without a `Location` header.
    async fn redirect_location(&self, url: &str) -> Result<String, AppError>;
}
