//! In-memory DAO implementations for tests and local wiring without MySQL.

mod document_dao_impl;
mod user_dao_impl;

pub use document_dao_impl::InMemoryDocumentDao;
pub use user_dao_impl::InMemoryUserDao;
