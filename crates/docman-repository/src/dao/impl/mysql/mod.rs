//! MySQL DAO implementations (SQLx).

mod document_dao_impl;
mod user_dao_impl;

pub use document_dao_impl::MySqlDocumentDaoImpl;
pub use user_dao_impl::MySqlUserDaoImpl;
