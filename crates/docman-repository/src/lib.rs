//! # Docman Repository
//!
//! Four-layer data access hierarchy:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn DocumentRepository>  (domain interface)
//! DocumentRepositoryImpl            (repository impl, wraps failures)
//!   ↓  Arc<dyn DocumentDao>         (DAO interface)
//! MySqlDocumentDaoImpl              (DAO impl, MySQL / SQLx)
//!   ↓
//! MySQL
//! ```
//!
//! Users follow the same path through `UserRepository` and `UserDao`.
//!
//! ## Structure
//!
//! ```text
//! src/
//!   filter.rs                        ← DocumentFilter predicate
//!   pool.rs                          ← DatabasePool
//!   traits.rs                        ← DocumentRepository, UserRepository
//!   impl/
//!     document_repository_impl.rs
//!     user_repository_impl.rs
//!   dao/
//!     document_dao.rs                ← DocumentDao trait
//!     user_dao.rs                    ← UserDao trait
//!     impl/
//!       mysql/                       ← MySqlDocumentDaoImpl, MySqlUserDaoImpl
//!       memory/                      ← in-memory DAOs (feature `test-utils`)
//! ```

pub mod dao;
pub mod filter;
pub mod pool;
pub mod traits;
pub mod r#impl;

pub use dao::{DocumentDao, MySqlDocumentDaoImpl, MySqlUserDaoImpl, UserDao};
pub use filter::DocumentFilter;
pub use pool::*;
pub use traits::*;
pub use r#impl::{DocumentRepositoryImpl, UserRepositoryImpl};

#[cfg(any(test, feature = "test-utils"))]
pub use dao::{InMemoryDocumentDao, InMemoryUserDao};
