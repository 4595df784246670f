//! Repository implementations.
//!
//! Concrete implementations of domain repository traits: a MySQL-backed
//! repository using SQLx prepared statements, and an in-memory variant used
//! by the integration tests.
//!
//! # Repositories
//!
//! - [`MySqlRedirectRepository`] - Redirect storage and retrieval in MySQL
//! - [`InMemoryRedirectRepository`] - Mutex-guarded map with identical semantics

pub mod memory;
pub mod mysql_redirect_repository;

pub use memory::InMemoryRedirectRepository;
pub use mysql_redirect_repository::MySqlRedirectRepository;
