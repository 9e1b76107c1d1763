//! DocumentDao trait — low-level document data access abstraction.
//!
//! Implementations talk to a single data source and report failures as-is.
//! [`DocumentRepository`] adds the uniform error translation on top.
//!
//! [`DocumentRepository`]: crate::traits::DocumentRepository

use crate::DocumentFilter;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docman_core::{Document, DocumentData, DocumentId, DocmanResult};

/// Low-level document data access object.
#[async_trait]
pub trait DocumentDao: Send + Sync {
    /// Persists a new document and returns it with its generated id.
    async fn insert(&self, data: &DocumentData) -> DocmanResult<Document>;

    /// Replaces title, content and shipping status. `None` if no row has `id`.
    async fn update(&self, id: DocumentId, data: &DocumentData) -> DocmanResult<Option<Document>>;

    /// Returns every document matching the filter, ordered by id.
    async fn find_many(&self, filter: &DocumentFilter) -> DocmanResult<Vec<Document>>;

    /// Finds a document by ID regardless of its delete flag.
    async fn find_by_id(&self, id: DocumentId) -> DocmanResult<Option<Document>>;

    /// Sets the delete flag and stamps `deleted_at`. `None` if no row has `id`.
    async fn soft_delete(&self, id: DocumentId, at: DateTime<Utc>) -> DocmanResult<Option<Document>>;
}
