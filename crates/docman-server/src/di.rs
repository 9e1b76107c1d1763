//! Dependency wiring.
//!
//! Builds the layer stack by hand:
//!
//! ```text
//! DAO (MySQL or caller-supplied)
//!   → Repository
//!     → Service
//!       → AppState
//! ```

use docman_config::SecurityConfig;
use docman_core::{DocmanError, DocmanResult};
use docman_repository::{
    DatabasePool, DocumentDao, DocumentRepositoryImpl, MySqlDocumentDaoImpl, MySqlUserDaoImpl,
    UserDao, UserRepositoryImpl,
};
use docman_rest::AppState;
use docman_security::{PasswordHasher, TokenProvider};
use docman_service::{AuthService, AuthServiceImpl, DocumentService, DocumentServiceImpl};
use std::sync::Arc;
use tracing::debug;

/// Fully wired application components.
#[derive(Clone)]
pub struct AppModule {
    document_service: Arc<dyn DocumentService>,
    auth_service: Arc<dyn AuthService>,
    token_provider: Arc<TokenProvider>,
    database: Option<Arc<DatabasePool>>,
}

impl AppModule {
    pub fn document_service(&self) -> Arc<dyn DocumentService> {
        self.document_service.clone()
    }

    pub fn auth_service(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    pub fn token_provider(&self) -> Arc<TokenProvider> {
        self.token_provider.clone()
    }

    pub fn database(&self) -> Option<Arc<DatabasePool>> {
        self.database.clone()
    }

    /// Builds the handler state, attaching the pool for health checks when present.
    pub fn app_state(&self) -> AppState {
        let state = AppState::new(self.document_service(), self.auth_service());
        match self.database() {
            Some(pool) => state.with_database(pool),
            None => state,
        }
    }
}

impl std::fmt::Debug for AppModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppModule")
            .field("has_database", &self.database.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for [`AppModule`].
///
/// Storage comes either from a database pool, which selects the MySQL DAOs,
/// or from explicitly supplied DAOs.
#[derive(Default)]
pub struct AppModuleBuilder {
    database: Option<Arc<DatabasePool>>,
    daos: Option<(Arc<dyn DocumentDao>, Arc<dyn UserDao>)>,
    security_config: Option<SecurityConfig>,
}

impl AppModuleBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_database_pool(mut self, pool: Arc<DatabasePool>) -> Self {
        self.database = Some(pool);
        self
    }

    /// Uses the given DAOs instead of MySQL ones.
    #[must_use]
    pub fn with_daos(mut self, documents: Arc<dyn DocumentDao>, users: Arc<dyn UserDao>) -> Self {
        self.daos = Some((documents, users));
        self
    }

    #[must_use]
    pub fn with_security_config(mut self, config: SecurityConfig) -> Self {
        self.security_config = Some(config);
        self
    }

    /// Wires every layer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no storage was supplied.
    pub fn build(self) -> DocmanResult<AppModule> {
        let (document_dao, user_dao): (Arc<dyn DocumentDao>, Arc<dyn UserDao>) =
            match (self.daos, &self.database) {
                (Some(daos), _) => daos,
                (None, Some(pool)) => (
                    Arc::new(MySqlDocumentDaoImpl::new(pool.clone())),
                    Arc::new(MySqlUserDaoImpl::new(pool.clone())),
                ),
                (None, None) => {
                    return Err(DocmanError::Configuration(
                        "a database pool or DAOs are required".to_string(),
                    ))
                }
            };

        let security_config = self.security_config.unwrap_or_default();
        let password_hasher = Arc::new(PasswordHasher::with_cost(security_config.password_hash_cost));
        let token_provider = Arc::new(TokenProvider::new(Arc::new(security_config)));

        let document_service: Arc<dyn DocumentService> = Arc::new(DocumentServiceImpl::new(
            Arc::new(DocumentRepositoryImpl::new(document_dao)),
        ));
        let auth_service: Arc<dyn AuthService> = Arc::new(AuthServiceImpl::new(
            Arc::new(UserRepositoryImpl::new(user_dao)),
            password_hasher,
            token_provider.clone(),
        ));

        debug!("Application module built");

        Ok(AppModule {
            document_service,
            auth_service,
            token_provider,
            database: self.database,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docman_core::{DocumentData, ShippingStatus, UserId};
    use docman_repository::{InMemoryDocumentDao, InMemoryUserDao};
    use docman_service::{DocumentSearchParams, LoginRequest, RegisterRequest};

    fn security_config() -> SecurityConfig {
        SecurityConfig {
            jwt_secret: "di-test-secret".to_string(),
            password_hash_cost: 1,
            ..SecurityConfig::default()
        }
    }

    fn in_memory_module() -> AppModule {
        AppModuleBuilder::new()
            .with_daos(Arc::new(InMemoryDocumentDao::new()), Arc::new(InMemoryUserDao::new()))
            .with_security_config(security_config())
            .build()
            .unwrap()
    }

    #[test]
    fn test_build_without_storage_fails() {
        let err = AppModuleBuilder::new().build().unwrap_err();
        assert!(matches!(err, DocmanError::Configuration(_)));
    }

    #[test]
    fn test_app_state_without_database() {
        let module = in_memory_module();
        assert!(module.database().is_none());
        assert!(module.app_state().database.is_none());
    }

    #[tokio::test]
    async fn test_document_service_is_wired_to_daos() {
        let module = in_memory_module();
        let service = module.document_service();

        let created = service
            .create(DocumentData::new("Title", "Body", ShippingStatus::SHIPPED))
            .await
            .unwrap();
        let found = service.search(DocumentSearchParams::new()).await.unwrap();

        assert_eq!(found, vec![created]);
    }

    #[tokio::test]
    async fn test_login_token_validates_with_module_provider() {
        let module = in_memory_module();
        let auth = module.auth_service();

        auth.register(RegisterRequest {
            name: Some("Jane".to_string()),
            email: Some("jane@example.com".to_string()),
            password: Some("Password123".to_string()),
        })
        .await
        .unwrap();
        let token = auth
            .login(LoginRequest {
                email: Some("jane@example.com".to_string()),
                password: Some("Password123".to_string()),
            })
            .await
            .unwrap()
            .token;

        let claims = module.token_provider().validate_token(&token).unwrap();
        assert_eq!(claims.user_id, UserId(1).into_inner());
    }
}
