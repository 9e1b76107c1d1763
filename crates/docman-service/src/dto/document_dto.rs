//! Document-related DTOs.

use chrono::{DateTime, Utc};
use docman_core::{DocmanError, DocmanResult, DocumentData, ShippingStatus};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request body for creating or replacing a document.
///
/// Every field is optional at the serde level so that a missing field
/// surfaces as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    #[validate(
        required(message = "title is required"),
        length(min = 1, max = 255, message = "title must be 1-255 characters"),
        custom(function = "docman_core::rules::not_blank", message = "title must not be blank")
    )]
    #[schema(example = "Quarterly report", max_length = 255)]
    pub title: Option<String>,

    #[validate(
        required(message = "content is required"),
        length(min = 1, max = 255, message = "content must be 1-255 characters"),
        custom(function = "docman_core::rules::not_blank", message = "content must not be blank")
    )]
    #[schema(example = "Shipped to the Osaka office", max_length = 255)]
    pub content: Option<String>,

    #[validate(
        required(message = "shippingStatus is required"),
        range(min = 0, message = "shippingStatus must be a non-negative integer")
    )]
    #[schema(example = 0, minimum = 0)]
    pub shipping_status: Option<i32>,
}

impl DocumentPayload {
    /// Converts a validated payload into domain data.
    ///
    /// Fails with a validation error when a field is missing, so calling
    /// this on an unvalidated payload is still safe.
    pub fn into_data(self) -> DocmanResult<DocumentData> {
        match (self.title, self.content, self.shipping_status) {
            (Some(title), Some(content), Some(status)) => {
                Ok(DocumentData::new(title, content, ShippingStatus::new(status)?))
            }
            _ => Err(DocmanError::validation("title, content and shippingStatus are required")),
        }
    }
}

/// Document response DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub shipping_status: i32,
    /// Display label of `shippingStatus`.
    #[schema(example = "not shipped")]
    pub shipping_status_label: String,
    pub delete_flag: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional search conditions for listing documents.
///
/// Soft-deleted documents are always excluded; the conditions narrow the
/// visible set further.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentSearchParams {
    /// Case-sensitive substring of the title. Empty means no condition.
    pub title: Option<String>,
    /// Exact shipping status, `0` included.
    pub shipping_status: Option<ShippingStatus>,
    /// Inclusive lower bound on `createdAt`.
    pub created_at_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `createdAt`.
    pub created_at_to: Option<DateTime<Utc>>,
}

impl DocumentSearchParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub const fn with_shipping_status(mut self, status: ShippingStatus) -> Self {
        self.shipping_status = Some(status);
        self
    }

    #[must_use]
    pub const fn with_created_at_from(mut self, from: DateTime<Utc>) -> Self {
        self.created_at_from = Some(from);
        self
    }

    #[must_use]
    pub const fn with_created_at_to(mut self, to: DateTime<Utc>) -> Self {
        self.created_at_to = Some(to);
        self
    }
}
