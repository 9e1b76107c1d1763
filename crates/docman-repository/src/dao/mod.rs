//! DAO (Data Access Object) layer.
//!
//! DAOs provide low-level, single-source data access abstractions.
//! Each DAO interface maps to one data source.
//!
//! Hierarchy:
//! ```text
//! Service → Repository (interface + impl) → DAO (interface + impl) → DB
//! ```

pub mod document_dao;
pub mod r#impl;
pub mod user_dao;

pub use document_dao::DocumentDao;
pub use r#impl::*;
pub use user_dao::UserDao;
