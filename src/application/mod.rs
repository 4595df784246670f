//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::shorten_service::ShortenService`] - Slug creation and deduplication
//! - [`services::resolve_service::ResolveService`] - Slug resolution, fallback delegation and hit counting

pub mod services;
