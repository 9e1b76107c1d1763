//! Custom Axum extractors.

mod claims;
mod document_id;
mod document_query;
mod validated;

pub use claims::*;
pub use document_id::*;
pub use document_query::*;
pub use validated::*;
