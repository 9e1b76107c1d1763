//! Document service trait definition.

use crate::dto::{DocumentResponse, DocumentSearchParams};
use async_trait::async_trait;
use docman_core::{DocmanResult, DocumentData, DocumentId};

/// Document service trait.
///
/// Lower-level failures come back as
/// [`DocmanError::Service`](docman_core::DocmanError::Service); not-found
/// and client errors keep their own kind.
#[async_trait]
pub trait DocumentService: Send + Sync {
    /// Lists visible documents matching the given conditions.
    async fn search(&self, params: DocumentSearchParams) -> DocmanResult<Vec<DocumentResponse>>;

    /// Gets a document by ID, soft-deleted ones included.
    async fn detail(&self, id: DocumentId) -> DocmanResult<Option<DocumentResponse>>;

    /// Creates a document.
    async fn create(&self, data: DocumentData) -> DocmanResult<DocumentResponse>;

    /// Replaces a document's title, content and shipping status.
    async fn update(&self, id: DocumentId, data: DocumentData) -> DocmanResult<DocumentResponse>;

    /// Soft-deletes a document.
    async fn delete(&self, id: DocumentId) -> DocmanResult<()>;
}
