//! MySQL document DAO.

use crate::{dao::DocumentDao, DatabasePool, DocumentFilter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docman_core::{Document, DocumentData, DocumentId, DocmanError, DocmanResult, ShippingStatus};
use sqlx::{FromRow, MySql, QueryBuilder};
use std::sync::Arc;
use tracing::debug;

const SELECT_DOCUMENTS: &str = r#"
    SELECT id, title, content, shipping_status, delete_flag, deleted_at, created_at, updated_at
    FROM documents"#;

/// Document DAO backed by the `documents` table.
#[derive(Clone)]
pub struct MySqlDocumentDaoImpl {
    pool: Arc<DatabasePool>,
}

impl MySqlDocumentDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a document.
#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    title: String,
    content: String,
    shipping_status: i32,
    delete_flag: bool,
    deleted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DocmanError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let shipping_status = ShippingStatus::new(row.shipping_status).map_err(|_| {
            DocmanError::Internal(format!(
                "Invalid shipping_status {} stored for document {}",
                row.shipping_status, row.id
            ))
        })?;

        Ok(Document {
            id: DocumentId(row.id),
            title: row.title,
            content: row.content,
            shipping_status,
            delete_flag: row.delete_flag,
            deleted_at: row.deleted_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl DocumentDao for MySqlDocumentDaoImpl {
    async fn insert(&self, data: &DocumentData) -> DocmanResult<Document> {
        debug!("Inserting document: {}", data.title);

        // MySQL doesn't support RETURNING, so insert then select
        let result = sqlx::query(
            r#"
            INSERT INTO documents (title, content, shipping_status)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.shipping_status.value())
        .execute(self.pool.inner())
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| DocmanError::Internal("Generated document id out of range".to_string()))?;

        self.find_by_id(DocumentId(id))
            .await?
            .ok_or_else(|| DocmanError::Internal("Failed to fetch inserted document".to_string()))
    }

    async fn update(&self, id: DocumentId, data: &DocumentData) -> DocmanResult<Option<Document>> {
        debug!("Updating document: {}", id);

        sqlx::query(
            r#"
            UPDATE documents
            SET title = ?, content = ?, shipping_status = ?
            WHERE id = ?
            "#,
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.shipping_status.value())
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        // rows_affected() is 0 for an unchanged row, so existence is checked by re-reading
        self.find_by_id(id).await
    }

    async fn find_many(&self, filter: &DocumentFilter) -> DocmanResult<Vec<Document>> {
        debug!("Finding documents matching {:?}", filter);

        let mut query = QueryBuilder::<MySql>::new(SELECT_DOCUMENTS);
        filter.push_where(&mut query);
        query.push(" ORDER BY id ASC");

        let rows = query
            .build_query_as::<DocumentRow>()
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn find_by_id(&self, id: DocumentId) -> DocmanResult<Option<Document>> {
        debug!("Finding document by id: {}", id);

        let row = sqlx::query_as::<_, DocumentRow>(&format!("{SELECT_DOCUMENTS} WHERE id = ?"))
            .bind(id.into_inner())
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(Document::try_from).transpose()
    }

    async fn soft_delete(&self, id: DocumentId, at: DateTime<Utc>) -> DocmanResult<Option<Document>> {
        debug!("Soft deleting document: {}", id);

        sqlx::query(
            r#"
            UPDATE documents
            SET delete_flag = TRUE, deleted_at = ?
            WHERE id = ?
            "#,
        )
        .bind(at)
        .bind(id.into_inner())
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(id).await
    }
}

impl std::fmt::Debug for MySqlDocumentDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlDocumentDaoImpl").finish_non_exhaustive()
    }
}
