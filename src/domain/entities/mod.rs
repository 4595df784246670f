//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the URL shortening service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`Redirect`] - A stored slug-to-URL mapping with hit counter
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! `NewRedirect` carries the fields the caller supplies; the store assigns
//! the creation timestamp.

pub mod redirect;

pub use redirect::{NewRedirect, Redirect};
