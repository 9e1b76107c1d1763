//! Domain entities.

mod document;
mod user;

pub use document::{Document, DocumentData};
pub use user::{NewUser, User};
