//! Slug resolution service.

use std::sync::Arc;

use crate::domain::entities::NewRedirect;
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::infrastructure::fallback::FallbackClient;

/// Service for resolving slugs to destination URLs.
///
/// Looks up the slug locally first. Unknown slugs are delegated to the
/// configured upstream shortener, whose answer is cached as a regular
/// redirect row so later hits stay local. Every successful resolution
/// counts one hit.
pub struct ResolveService {
    repository: Arc<dyn RedirectRepository>,
    fallback: Arc<dyn FallbackClient>,
    fallback_url: Option<String>,
    default_url: Option<String>,
}

impl ResolveService {
    /// Creates a new resolve service.
    ///
    /// `fallback_url` is a template with a single `%s` placeholder for the
    /// slug. `default_url` is where unmatched requests are sent.
    pub fn new(
        repository: Arc<dyn RedirectRepository>,
        fallback: Arc<dyn FallbackClient>,
        fallback_url: Option<String>,
        default_url: Option<String>,
    ) -> Self {
        Self {
            repository,
            fallback,
            fallback_url,
            default_url,
        }
    }

    /// Resolves a slug to its destination URL and counts the hit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when the slug is unknown and no
    /// fallback upstream is configured.
    /// Returns [`AppError::Fallback`] when delegation fails.
    pub async fn resolve(&self, slug: &str) -> Result<String, AppError> {
        let url = match self.repository.find_url_by_slug(slug).await? {
            Some(url) => url,
            None => self.resolve_via_fallback(slug).await?,
        };

        self.repository.increment_hits(slug).await?;
        tracing::info!("/{slug} -> {url}");

        Ok(url)
    }

    /// Destination URL for requests no other route matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] when no default URL is configured.
    pub fn catch_all(&self) -> Result<&str, AppError> {
        match self.default_url.as_deref() {
            Some(url) => Ok(url),
            None => {
                tracing::warn!("Catch all requested but default_url not set");
                Err(AppError::NotFound)
            }
        }
    }

    async fn resolve_via_fallback(&self, slug: &str) -> Result<String, AppError> {
        let Some(pattern) = self.fallback_url.as_deref() else {
            tracing::warn!("/{slug} not found");
            return Err(AppError::NotFound);
        };

        let delegate_url = pattern.replacen("%s", slug, 1);
        let url = self.fallback.redirect_location(&delegate_url).await?;

        self.cache(slug, &url).await?;
        tracing::info!("/{slug} created");

        Ok(url)
    }

    async fn cache(&self, slug: &str, url: &str) -> Result<(), AppError> {
        self.repository
            .insert(NewRedirect {
                slug: slug.to_string(),
                url: url.to_string(),
                hits: 0,
            })
            .await
            .map_err(|e| match e {
                // A lost insert race is not a collision to retry here.
                AppError::Conflict(message) => AppError::store(message),
                other => other,
            })
    }
}
