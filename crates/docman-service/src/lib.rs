//! # Docman Service
//!
//! Business logic service layer for docman: document search and
//! maintenance, user registration and login.

pub mod auth_service;
pub mod document_service;
pub mod dto;
pub mod r#impl;
pub mod mappers;

pub use auth_service::*;
pub use document_service::*;
pub use dto::*;
pub use r#impl::*;
