//! `UserRepositoryImpl` — Repository layer implementation.
//!
//! ```text
//! AuthService
//!   ↓ Arc<dyn UserRepository>
//! UserRepositoryImpl          ← error translation
//!   ↓ Arc<dyn UserDao>
//! MySqlUserDaoImpl
//!   ↓
//! MySQL
//! ```
//!
//! [`UserDao`]: crate::dao::UserDao

use crate::{dao::UserDao, traits::UserRepository};
use async_trait::async_trait;
use docman_core::{DocmanResult, NewUser, User, UserId};
use std::sync::Arc;
use tracing::debug;

/// Repository implementation that orchestrates [`UserDao`] access.
pub struct UserRepositoryImpl {
    user_dao: Arc<dyn UserDao>,
}

impl UserRepositoryImpl {
    /// Creates a new `UserRepositoryImpl` with the given DAO.
    #[must_use]
    pub fn new(user_dao: Arc<dyn UserDao>) -> Self {
        Self { user_dao }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: NewUser) -> DocmanResult<User> {
        debug!("Repository: create user {}", user.email);
        self.user_dao
            .insert(&user)
            .await
            .map_err(|e| e.into_repository("failed to create user"))
    }

    async fn find_by_id(&self, id: UserId) -> DocmanResult<Option<User>> {
        debug!("Repository: find_by_id {}", id);
        self.user_dao
            .find_by_id(id)
            .await
            .map_err(|e| e.into_repository("failed to fetch user by id"))
    }

    async fn find_by_email(&self, email: &str) -> DocmanResult<Option<User>> {
        debug!("Repository: find_by_email {}", email);
        self.user_dao
            .find_by_email(email)
            .await
            .map_err(|e| e.into_repository("failed to fetch user by email"))
    }

    async fn exists_by_email(&self, email: &str) -> DocmanResult<bool> {
        self.user_dao
            .exists_by_email(email)
            .await
            .map_err(|e| e.into_repository("failed to check user email"))
    }
}

impl std::fmt::Debug for UserRepositoryImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRepositoryImpl").finish_non_exhaustive()
    }
}
