//! Data Transfer Objects (DTOs).

mod auth_dto;
mod document_dto;

pub use auth_dto::*;
pub use document_dto::*;
