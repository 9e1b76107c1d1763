//! Repository trait definitions.
//!
//! Every lower-level failure leaving a repository is a
//! [`DocmanError::Repository`](docman_core::DocmanError::Repository) naming
//! the operation. Not-found and conflict results keep their own kind.

use crate::DocumentFilter;
use async_trait::async_trait;
use docman_core::{Document, DocumentData, DocumentId, DocmanResult, NewUser, User, UserId};

/// Document repository trait.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Persists a new document.
    async fn create(&self, data: DocumentData) -> DocmanResult<Document>;

    /// Replaces title, content and shipping status of an existing document.
    ///
    /// Fails with `NotFound` if no document has `id`.
    async fn update(&self, id: DocumentId, data: DocumentData) -> DocmanResult<Document>;

    /// Finds documents matching a predicate. No visibility rule is applied here.
    async fn find_many(&self, filter: &DocumentFilter) -> DocmanResult<Vec<Document>>;

    /// Finds a document by ID, soft-deleted or not. Absence is `Ok(None)`.
    async fn find_by_id(&self, id: DocumentId) -> DocmanResult<Option<Document>>;

    /// Flags a document as deleted and stamps `deleted_at` with the current time.
    ///
    /// Repeating the call succeeds and moves `deleted_at` forward.
    /// Fails with `NotFound` if no document has `id`.
    async fn soft_delete(&self, id: DocumentId) -> DocmanResult<Document>;
}

/// User repository trait.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists a new user.
    async fn create(&self, user: NewUser) -> DocmanResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> DocmanResult<Option<User>>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> DocmanResult<Option<User>>;

    /// Checks if an email exists.
    async fn exists_by_email(&self, email: &str) -> DocmanResult<bool>;
}
