//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into domain operations and formats
//! the plain-text responses the service speaks.
//!
//! # Modules
//!
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod handlers;
pub mod middleware;
