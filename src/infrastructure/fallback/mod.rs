//! Upstream delegation for unknown slugs.
//!
//! Provides a [`FallbackClient`] trait with a reqwest-backed implementation:
//! - [`HttpFallbackClient`] - Fetches the upstream URL without following
//!   redirects and reports the advertised `Location`

mod client;
mod http_client;

pub use client::FallbackClient;
pub use http_client::HttpFallbackClient;

#[cfg(test)]
pub use client::MockFallbackClient;
