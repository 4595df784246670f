//! URL shortening service.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::NewRedirect;
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;
use crate::utils::slug_encoder;

/// Result of a shorten request.
///
/// `created` distinguishes a freshly minted slug from a deduplicated reuse
/// so the handler can pick between 201 and 200.
#[derive(Debug, Clone)]
pub struct ShortenOutcome {
    pub slug: String,
    pub short_url: String,
    pub created: bool,
}

/// Service for turning long URLs into short slugs.
///
/// Deduplicates by exact URL match and derives slugs from the current time,
/// retrying once with a finer-grained seed pair when the first candidate
/// collides.
pub struct ShortenService {
    repository: Arc<dyn RedirectRepository>,
    short_base: Option<String>,
    slug_prefix: String,
}

impl ShortenService {
    /// Creates a new shorten service.
    ///
    /// `short_base` is the public base the service advertises in shorten
    /// responses; without it shortening is refused. `slug_prefix` is glued
    /// in front of every generated slug and may be empty.
    pub fn new(
        repository: Arc<dyn RedirectRepository>,
        short_base: Option<String>,
        slug_prefix: String,
    ) -> Self {
        Self {
            repository,
            short_base,
            slug_prefix,
        }
    }

    /// Shortens a URL, reusing the stored slug when the exact URL was
    /// shortened before.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `url` is empty.
    /// Returns [`AppError::Config`] when no public base URL is configured.
    /// Returns [`AppError::Generation`] when both slug candidates collide.
    pub async fn shorten(&self, url: &str) -> Result<ShortenOutcome, AppError> {
        if url.is_empty() {
            return Err(AppError::validation("missing url parameter"));
        }

        let Some(base) = self.short_base.as_deref() else {
            return Err(AppError::config("SHORT_URL is not configured"));
        };

        if let Some(slug) = self.repository.find_slug_by_url(url).await? {
            tracing::info!("/{slug} -> {url}");
            return Ok(Self::outcome(base, slug, false));
        }

        let slug = self.generate(url).await?;
        tracing::info!("/{slug} created");

        Ok(Self::outcome(base, slug, true))
    }

    fn outcome(base: &str, slug: String, created: bool) -> ShortenOutcome {
        let short_url = format!("{}/{}", base.trim_end_matches('/'), slug);

        ShortenOutcome {
            slug,
            short_url,
            created,
        }
    }

    /// Derives a slug from the current time and stores the mapping.
    ///
    /// The first candidate encodes the Unix seconds. When that slug is
    /// already taken, the sub-second nanoseconds of the same instant are
    /// appended as a second seed number. A second collision gives up.
    async fn generate(&self, url: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let seconds = now.timestamp().rem_euclid(i64::MAX) as u64;

        let slug = self.candidate(&[seconds]);
        match self.try_insert(&slug, url).await {
            Ok(()) => return Ok(slug),
            Err(AppError::Conflict(_)) => {}
            Err(e) => return Err(e),
        }

        let nanos = u64::from(now.timestamp_subsec_nanos());
        let slug = self.candidate(&[seconds, nanos]);
        match self.try_insert(&slug, url).await {
            Ok(()) => Ok(slug),
            Err(AppError::Conflict(_)) => Err(AppError::generation(format!(
                "both slug candidates for {url} collided"
            ))),
            Err(e) => Err(e),
        }
    }

    fn candidate(&self, seeds: &[u64]) -> String {
        format!("{}{}", self.slug_prefix, slug_encoder::encode(seeds))
    }

    async fn try_insert(&self, slug: &str, url: &str) -> Result<(), AppError> {
        self.repository
            .insert(NewRedirect {
                slug: slug.to_string(),
                url: url.to_string(),
                hits: 0,
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRedirectRepository;

    fn service(repository: MockRedirectRepository) -> ShortenService {
        ShortenService::new(
            Arc::new(repository),
            Some("https://sho.rt".to_string()),
            String::new(),
        )
    }

    #[tokio::test]
    async fn test_shorten_rejects_empty_url() {
        let mock_repo = MockRedirectRepository::new();

        let result = service(mock_repo).shorten("").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_shorten_requires_short_base() {
        let mock_repo = MockRedirectRepository::new();
        let service = ShortenService::new(Arc::new(mock_repo), None, String::new());

        let result = service.shorten("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Config(_)));
    }

    #[tokio::test]
    async fn test_shorten_reuses_existing_slug() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_find_slug_by_url()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|_| Ok(Some("jR".to_string())));

        mock_repo.expect_insert().times(0);

        let result = service(mock_repo).shorten("https://example.com").await;

        let outcome = result.unwrap();
        assert_eq!(outcome.slug, "jR");
        assert_eq!(outcome.short_url, "https://sho.rt/jR");
        assert!(!outcome.created);
    }

    #[tokio::test]
    async fn test_shorten_creates_new_slug() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_find_slug_by_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .withf(|new_redirect| {
                new_redirect.hits == 0
                    && !new_redirect.slug.is_empty()
                    && new_redirect.url == "https://example.com"
            })
            .times(1)
            .returning(|_| Ok(()));

        let result = service(mock_repo).shorten("https://example.com").await;

        let outcome = result.unwrap();
        assert!(outcome.created);
        assert_eq!(outcome.short_url, format!("https://sho.rt/{}", outcome.slug));
    }

    #[tokio::test]
    async fn test_shorten_trims_trailing_slash_from_base() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_find_slug_by_url()
            .times(1)
            .returning(|_| Ok(Some("jR".to_string())));

        let service = ShortenService::new(
            Arc::new(mock_repo),
            Some("https://sho.rt/".to_string()),
            String::new(),
        );

        let outcome = service.shorten("https://example.com").await.unwrap();
        assert_eq!(outcome.short_url, "https://sho.rt/jR");
    }

    #[tokio::test]
    async fn test_shorten_retries_on_slug_collision() {
        let mut mock_repo = MockRedirectRepository::new();
        let mut seq = mockall::Sequence::new();

        mock_repo
            .expect_find_slug_by_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::conflict("slug already exists")));

        mock_repo
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(result.unwrap().created);
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_second_collision() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_find_slug_by_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .times(2)
            .returning(|_| Err(AppError::conflict("slug already exists")));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Generation(_)));
    }

    #[tokio::test]
    async fn test_shorten_does_not_retry_store_errors() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_find_slug_by_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(AppError::store("connection reset")));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Store(_)));
    }

    #[tokio::test]
    async fn test_slug_prefix_is_applied() {
        let mut mock_repo = MockRedirectRepository::new();

        mock_repo
            .expect_find_slug_by_url()
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert()
            .withf(|new_redirect| new_redirect.slug.starts_with('_'))
            .times(1)
            .returning(|_| Ok(()));

        let service = ShortenService::new(
            Arc::new(mock_repo),
            Some("https://sho.rt".to_string()),
            "_".to_string(),
        );

        let outcome = service.shorten("https://example.com").await.unwrap();
        assert!(outcome.slug.starts_with('_'));
    }
}
