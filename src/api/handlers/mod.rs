//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one route.

pub mod catch_all;
pub mod resolve;
pub mod shorten;

pub use catch_all::catch_all_handler;
pub use resolve::resolve_handler;
pub use shorten::shorten_handler;
