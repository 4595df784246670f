//! MySQL implementation of the redirect repository.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use std::sync::Arc;

use crate::domain::entities::NewRedirect;
use crate::domain::repositories::RedirectRepository;
use crate::error::AppError;

/// MySQL repository for redirect storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Unique-key
/// violations on the slug primary key surface as [`AppError::Conflict`]
/// through the shared `From<sqlx::Error>` mapping.
pub struct MySqlRedirectRepository {
    pool: Arc<MySqlPool>,
}

impl MySqlRedirectRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<MySqlPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RedirectRepository for MySqlRedirectRepository {
    async fn find_slug_by_url(&self, url: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT slug
            FROM redirect
            WHERE url = ?
            LIMIT 1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| r.try_get("slug")).transpose()?)
    }

    async fn find_url_by_slug(&self, slug: &str) -> Result<Option<String>, AppError> {
        let row = sqlx::query(
            r#"
            SELECT url
            FROM redirect
            WHERE slug = ?
            LIMIT 1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|r| r.try_get("url")).transpose()?)
    }

    async fn insert(&self, new_redirect: NewRedirect) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO redirect (slug, url, date, hits)
            VALUES (?, ?, NOW(), ?)
            "#,
        )
        .bind(&new_redirect.slug)
        .bind(&new_redirect.url)
        .bind(new_redirect.hits)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn increment_hits(&self, slug: &str) -> Result<(), AppError> {
        sqlx::query(
            r#"
            UPDATE redirect
            SET hits = hits + 1
            WHERE slug = ?
            "#,
        )
        .bind(slug)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
