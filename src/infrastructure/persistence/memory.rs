//! In-memory implementation of the redirect repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewRedirect, Redirect};
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// In-memory repository backed by a mutex-guarded map.
///
/// Used by the integration tests and handy for local experimentation.
/// Semantics mirror the MySQL implementation: inserting a taken slug is a
/// conflict, incrementing an unknown slug is a no-op.
#[derive(Debug, Default)]
pub struct InMemoryRedirectRepository {
    entries: Mutex<HashMap<String, Redirect>>,
}

impl InMemoryRedirectRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a stored redirect by slug, if present.
    pub fn get(&self, slug: &str) -> Option<Redirect> {
        self.entries
            .lock()
            .ok()
            .and_then(|entries| entries.get(slug).cloned())
    }

    /// Number of stored redirects.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    /// Returns `true` when no redirects are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn storage(&self) -> Result<MutexGuard<'_, HashMap<String, Redirect>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::store("redirect store lock poisoned"))
    }
}

#[async_trait]
impl RedirectRepository for InMemoryRedirectRepository {
    async fn find_slug_by_url(&self, url: &str) -> Result<Option<String>, AppError> {
        let entries = self.storage()?;

        Ok(entries
            .values()
            .find(|redirect| redirect.url == url)
            .map(|redirect| redirect.slug.clone()))
    }

    async fn find_url_by_slug(&self, slug: &str) -> Result<Option<String>, AppError> {
        let entries = self.storage()?;

        Ok(entries.get(slug).map(|redirect| redirect.url.clone()))
    }

    async fn insert(&self, new_redirect: NewRedirect) -> Result<(), AppError> {
        let mut entries = self.storage()?;

        if entries.contains_key(&new_redirect.slug) {
            return Err(AppError::conflict(format!(
                "slug '{}' already exists",
                new_redirect.slug
            )));
        }

        let redirect = Redirect::new(
            new_redirect.slug.clone(),
            new_redirect.url,
            Utc::now(),
            new_redirect.hits,
        );
        entries.insert(new_redirect.slug, redirect);

        Ok(())
    }

    async fn increment_hits(&self, slug: &str) -> Result<(), AppError> {
        let mut entries = self.storage()?;

        if let Some(redirect) = entries.get_mut(slug) {
            redirect.hits += 1;
        }

        Ok(())
    }
}
