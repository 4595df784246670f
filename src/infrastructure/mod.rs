//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and outbound HTTP.
//!
//! # Modules
//!
//! - [`fallback`] - Delegation client that asks an upstream shortener for unknown slugs
//! - [`persistence`] - Repository implementations (MySQL and in-memory)

pub mod fallback;
pub mod persistence;
