//! Redirect entity representing a slug-to-URL mapping.

use chrono::{DateTime, Utc};

/// A stored redirect with metadata.
///
/// Maps a short slug to its destination URL and tracks how often the
/// slug has been resolved.
#[derive(Debug, Clone)]
pub struct Redirect {
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub hits: i64,
}

impl Redirect {
    /// Creates a new Redirect instance.
    pub fn new(slug: String, url: String, created_at: DateTime<Utc>, hits: i64) -> Self {
        Self {
            slug,
            url,
            created_at,
            hits,
        }
    }
}

/// Input data for creating a new redirect.
///
/// Shortening inserts rows with `hits: 0`; fallback-derived rows also
/// start at zero and count the triggering request through the normal
/// hit increment.
#[derive(Debug, Clone)]
pub struct NewRedirect {
    pub slug: String,
    pub url: String,
    pub hits: i64,
}
