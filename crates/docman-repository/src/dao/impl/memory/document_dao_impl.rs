//! In-memory document DAO.

use crate::{dao::DocumentDao, DocumentFilter};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docman_core::{Document, DocumentData, DocumentId, DocmanError, DocmanResult};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Document DAO holding rows in a `BTreeMap`, keyed and ordered by id.
///
/// [`set_failing`](Self::set_failing) makes every call fail with a database
/// error, which is how callers exercise their failure paths.
#[derive(Debug, Default)]
pub struct InMemoryDocumentDao {
    rows: Mutex<BTreeMap<i64, Document>>,
    failing: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryDocumentDao {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a DAO pre-populated with the given documents, ids kept as-is.
    #[must_use]
    pub fn with_documents(documents: Vec<Document>) -> Self {
        let dao = Self::new();
        {
            let mut rows = dao.lock();
            for document in documents {
                rows.insert(document.id.into_inner(), document);
            }
        }
        dao
    }

    /// Toggles simulated outage mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of DAO calls made so far, failed ones included.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Snapshot of a stored row, bypassing the failure switch.
    #[must_use]
    pub fn get(&self, id: DocumentId) -> Option<Document> {
        self.lock().get(&id.into_inner()).cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<i64, Document>> {
        self.rows.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn enter(&self) -> DocmanResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DocmanError::Database("simulated database outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentDao for InMemoryDocumentDao {
    async fn insert(&self, data: &DocumentData) -> DocmanResult<Document> {
        self.enter()?;
        let mut rows = self.lock();
        let id = rows.keys().next_back().map_or(1, |last| last + 1);
        let now = Utc::now();
        let document = Document {
            id: DocumentId(id),
            title: data.title.clone(),
            content: data.content.clone(),
            shipping_status: data.shipping_status,
            delete_flag: false,
            deleted_at: None,
            created_at: now,
            updated_at: now,
        };
        rows.insert(id, document.clone());
        Ok(document)
    }

    async fn update(&self, id: DocumentId, data: &DocumentData) -> DocmanResult<Option<Document>> {
        self.enter()?;
        Ok(self.lock().get_mut(&id.into_inner()).map(|document| {
            document.apply(data.clone());
            document.clone()
        }))
    }

    async fn find_many(&self, filter: &DocumentFilter) -> DocmanResult<Vec<Document>> {
        self.enter()?;
        Ok(self.lock().values().filter(|d| filter.matches(d)).cloned().collect())
    }

    async fn find_by_id(&self, id: DocumentId) -> DocmanResult<Option<Document>> {
        self.enter()?;
        Ok(self.get(id))
    }

    async fn soft_delete(&self, id: DocumentId, at: DateTime<Utc>) -> DocmanResult<Option<Document>> {
        self.enter()?;
        Ok(self.lock().get_mut(&id.into_inner()).map(|document| {
            document.mark_deleted(at);
            document.clone()
        }))
    }
}
