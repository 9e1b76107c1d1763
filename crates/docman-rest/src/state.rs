//! Application state for Axum handlers.

use docman_repository::DatabasePool;
use docman_service::{AuthService, DocumentService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<dyn DocumentService>,
    pub auth_service: Arc<dyn AuthService>,
    /// Pool pinged by the health check; `None` when running without MySQL.
    pub database: Option<Arc<DatabasePool>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        document_service: Arc<dyn DocumentService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            document_service,
            auth_service,
            database: None,
        }
    }

    /// Attaches the database pool used by the health check.
    #[must_use]
    pub fn with_database(mut self, pool: Arc<DatabasePool>) -> Self {
        self.database = Some(pool);
        self
    }
}
