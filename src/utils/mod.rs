//! Utility functions used across the application.
//!
//! - [`slug_encoder`] - Number-to-slug encoding for generated short links

pub mod slug_encoder;
