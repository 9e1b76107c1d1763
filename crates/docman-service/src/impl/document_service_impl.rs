//! Document service implementation.

use crate::document_service::DocumentService;
use crate::dto::{DocumentResponse, DocumentSearchParams};
use async_trait::async_trait;
use docman_core::{DocmanResult, DocumentData, DocumentId};
use docman_repository::{DocumentFilter, DocumentRepository};
use std::sync::Arc;
use tracing::{debug, info};

/// Document service over a [`DocumentRepository`].
pub struct DocumentServiceImpl {
    document_repository: Arc<dyn DocumentRepository>,
}

impl DocumentServiceImpl {
    /// Creates a new document service.
    #[must_use]
    pub fn new(document_repository: Arc<dyn DocumentRepository>) -> Self {
        Self { document_repository }
    }
}

#[async_trait]
impl DocumentService for DocumentServiceImpl {
    async fn search(&self, params: DocumentSearchParams) -> DocmanResult<Vec<DocumentResponse>> {
        let filter = DocumentFilter::from(params);
        debug!("Searching documents: {:?}", filter);

        let documents = self
            .document_repository
            .find_many(&filter)
            .await
            .map_err(|e| e.into_service("failed to fetch documents in document service"))?;

        Ok(documents.into_iter().map(DocumentResponse::from).collect())
    }

    async fn detail(&self, id: DocumentId) -> DocmanResult<Option<DocumentResponse>> {
        debug!("Getting document: {}", id);

        let document = self
            .document_repository
            .find_by_id(id)
            .await
            .map_err(|e| e.into_service("failed to fetch document in document service"))?;

        Ok(document.map(DocumentResponse::from))
    }

    async fn create(&self, data: DocumentData) -> DocmanResult<DocumentResponse> {
        let document = self
            .document_repository
            .create(data)
            .await
            .map_err(|e| e.into_service("failed to create document in document service"))?;

        info!("Document created: {}", document.id);
        Ok(DocumentResponse::from(document))
    }

    async fn update(&self, id: DocumentId, data: DocumentData) -> DocmanResult<DocumentResponse> {
        let document = self
            .document_repository
            .update(id, data)
            .await
            .map_err(|e| e.into_service("failed to update document in document service"))?;

        info!("Document updated: {}", document.id);
        Ok(DocumentResponse::from(document))
    }

    async fn delete(&self, id: DocumentId) -> DocmanResult<()> {
        self.document_repository
            .soft_delete(id)
            .await
            .map_err(|e| e.into_service("failed to delete document in document service"))?;

        info!("Document deleted: {}", id);
        Ok(())
    }
}

impl std::fmt::Debug for DocumentServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentServiceImpl").finish_non_exhaustive()
    }
}
