//! Result type aliases for docman.

use crate::DocmanError;

/// A specialized `Result` type for docman operations.
pub type DocmanResult<T> = Result<T, DocmanError>;
