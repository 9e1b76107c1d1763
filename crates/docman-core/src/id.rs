//! Typed ID wrappers for domain entities.
//!
//! Both identifiers are store-generated auto-increment integers.

use crate::DocmanError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

/// A strongly-typed wrapper for document IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct DocumentId(pub i64);

impl DocumentId {
    /// Parses a document ID from a path segment.
    ///
    /// Anything that is not a plain integer yields [`DocmanError::InvalidId`].
    pub fn parse(s: &str) -> Result<Self, DocmanError> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DocmanError::InvalidId(s.to_string()))
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = DocmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<i64> for DocumentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<DocumentId> for i64 {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

/// A strongly-typed wrapper for user IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct UserId(pub i64);

impl UserId {
    /// Parses a user ID, e.g. from a token subject.
    pub fn parse(s: &str) -> Result<Self, DocmanError> {
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| DocmanError::InvalidId(s.to_string()))
    }

    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_parsing() {
        assert_eq!(DocumentId::parse("42").unwrap(), DocumentId(42));
        assert_eq!("7".parse::<DocumentId>().unwrap().into_inner(), 7);
    }

    #[test]
    fn test_document_id_rejects_non_numeric() {
        let err = DocumentId::parse("abc").unwrap_err();
        assert!(matches!(err, DocmanError::InvalidId(ref raw) if raw == "abc"));
        assert!(DocumentId::parse("1.5").is_err());
        assert!(DocumentId::parse("").is_err());
    }

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId(12).to_string(), "12");
        assert_eq!(UserId::parse("12").unwrap(), UserId::from(12));
    }

    #[test]
    fn test_ids_serialize_as_integers() {
        assert_eq!(serde_json::to_string(&DocumentId(3)).unwrap(), "3");
    }
}
