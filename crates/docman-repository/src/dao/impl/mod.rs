//! DAO implementations.
//!
//! Trait definitions live in the parent `dao/` module.
//! Implementations are organized by backing store.

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod mysql;

#[cfg(any(test, feature = "test-utils"))]
pub use memory::{InMemoryDocumentDao, InMemoryUserDao};
pub use mysql::{MySqlDocumentDaoImpl, MySqlUserDaoImpl};
