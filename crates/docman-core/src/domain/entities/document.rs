//! Document entity.

use crate::domain::ShippingStatus;
use crate::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored document.
///
/// Documents are never physically removed: deleting one sets
/// `delete_flag` and stamps `deleted_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub content: String,
    pub shipping_status: ShippingStatus,
    pub delete_flag: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Checks if the document has been soft-deleted.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.delete_flag
    }

    /// Applies a full replacement of the editable fields.
    pub fn apply(&mut self, data: DocumentData) {
        self.title = data.title;
        self.content = data.content;
        self.shipping_status = data.shipping_status;
        self.updated_at = Utc::now();
    }

    /// Marks the document as deleted at the given instant.
    ///
    /// Calling this again on a deleted document moves `deleted_at` forward.
    pub fn mark_deleted(&mut self, at: DateTime<Utc>) {
        self.delete_flag = true;
        self.deleted_at = Some(at);
        self.updated_at = at;
    }
}

/// Editable document fields, used for both create and full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentData {
    pub title: String,
    pub content: String,
    pub shipping_status: ShippingStatus,
}

impl DocumentData {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>, shipping_status: ShippingStatus) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            shipping_status,
        }
    }
}
