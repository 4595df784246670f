//! Repository trait for redirect data access.

use crate::domain::entities::NewRedirect;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing stored redirects.
///
/// Covers the four operations the workflows need: dedup lookup by URL,
/// resolution by slug, insertion, and hit counting.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MySqlRedirectRepository`] - MySQL implementation
/// - [`crate::infrastructure::persistence::InMemoryRedirectRepository`] - In-memory implementation for tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Finds the slug of an existing redirect for the exact destination URL.
    ///
    /// Used by shortening to return the existing slug instead of minting a
    /// new one. If several rows share the URL, any one of their slugs may be
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_slug_by_url(&self, url: &str) -> Result<Option<String>, AppError>;

    /// Finds the destination URL for a slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the slug is known
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn find_url_by_slug(&self, slug: &str) -> Result<Option<String>, AppError>;

    /// Inserts a new redirect row.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already taken.
    /// Returns [`AppError::Store`] on other database errors.
    async fn insert(&self, new_redirect: NewRedirect) -> Result<(), AppError>;

    /// Atomically increments the hit counter for a slug.
    ///
    /// Incrementing an unknown slug is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Store`] on database errors.
    async fn increment_hits(&self, slug: &str) -> Result<(), AppError>;
}
