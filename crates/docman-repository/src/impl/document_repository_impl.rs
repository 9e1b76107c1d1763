//! `DocumentRepositoryImpl` — Repository layer implementation.
//!
//! Sits between Service and DAO:
//!
//! ```text
//! Service
//!   ↓ Arc<dyn DocumentRepository>
//! DocumentRepositoryImpl      ← error translation
//!   ↓ Arc<dyn DocumentDao>
//! MySqlDocumentDaoImpl
//!   ↓
//! MySQL
//! ```

use crate::{dao::DocumentDao, traits::DocumentRepository, DocumentFilter};
use async_trait::async_trait;
use chrono::Utc;
use docman_core::{Document, DocumentData, DocumentId, DocmanError, DocmanResult};
use std::sync::Arc;
use tracing::debug;

const CREATE_FAILED: &str = "failed to create document";
const UPDATE_FAILED: &str = "failed to update document";
const FIND_MANY_FAILED: &str = "failed to fetch documents";
const FIND_BY_ID_FAILED: &str = "failed to fetch document by id";
const DELETE_FAILED: &str = "failed to delete document";

/// Repository implementation over a [`DocumentDao`].
pub struct DocumentRepositoryImpl {
    document_dao: Arc<dyn DocumentDao>,
}

impl DocumentRepositoryImpl {
    /// Creates a new `DocumentRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(document_dao: Arc<dyn DocumentDao>) -> Self {
        Self { document_dao }
    }
}

#[async_trait]
impl DocumentRepository for DocumentRepositoryImpl {
    async fn create(&self, data: DocumentData) -> DocmanResult<Document> {
        debug!("Repository: create document {}", data.title);
        self.document_dao
            .insert(&data)
            .await
            .map_err(|e| e.into_repository(CREATE_FAILED))
    }

    async fn update(&self, id: DocumentId, data: DocumentData) -> DocmanResult<Document> {
        debug!("Repository: update document {}", id);
        self.document_dao
            .update(id, &data)
            .await
            .map_err(|e| e.into_repository(UPDATE_FAILED))?
            .ok_or_else(|| DocmanError::not_found("Document", id))
    }

    async fn find_many(&self, filter: &DocumentFilter) -> DocmanResult<Vec<Document>> {
        debug!("Repository: find_many {:?}", filter);
        self.document_dao
            .find_many(filter)
            .await
            .map_err(|e| e.into_repository(FIND_MANY_FAILED))
    }

    async fn find_by_id(&self, id: DocumentId) -> DocmanResult<Option<Document>> {
        debug!("Repository: find_by_id {}", id);
        self.document_dao
            .find_by_id(id)
            .await
            .map_err(|e| e.into_repository(FIND_BY_ID_FAILED))
    }

    async fn soft_delete(&self, id: DocumentId) -> DocmanResult<Document> {
        debug!("Repository: soft_delete {}", id);
        self.document_dao
            .soft_delete(id, Utc::now())
            .await
            .map_err(|e| e.into_repository(DELETE_FAILED))?
            .ok_or_else(|| DocmanError::not_found("Document", id))
    }
}

impl std::fmt::Debug for DocumentRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRepositoryImpl").finish_non_exhaustive()
    }
}
