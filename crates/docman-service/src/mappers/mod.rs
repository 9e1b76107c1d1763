//! Entity-DTO mappers.

use crate::dto::{DocumentResponse, DocumentSearchParams, UserResponse};
use docman_core::{Document, User};
use docman_repository::DocumentFilter;

impl From<Document> for DocumentResponse {
    fn from(document: Document) -> Self {
        Self {
            id: document.id.into_inner(),
            shipping_status: document.shipping_status.value(),
            shipping_status_label: document.shipping_status.label().to_string(),
            title: document.title,
            content: document.content,
            delete_flag: document.delete_flag,
            deleted_at: document.deleted_at,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Builds the repository predicate for a search.
///
/// Starts from "not deleted" and adds one condition per present parameter.
/// An empty title adds nothing; a shipping status of `0` is still a condition.
impl From<DocumentSearchParams> for DocumentFilter {
    fn from(params: DocumentSearchParams) -> Self {
        let mut filter = Self::not_deleted();

        if let Some(title) = params.title.filter(|t| !t.is_empty()) {
            filter = filter.with_title_contains(title);
        }
        if let Some(status) = params.shipping_status {
            filter = filter.with_shipping_status(status);
        }
        if let Some(from) = params.created_at_from {
            filter = filter.with_created_from(from);
        }
        if let Some(to) = params.created_at_to {
            filter = filter.with_created_to(to);
        }

        filter
    }
}
