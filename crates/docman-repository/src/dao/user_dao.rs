//! UserDao trait — low-level user data access abstraction.

use async_trait::async_trait;
use docman_core::{DocmanResult, NewUser, User, UserId};

/// Low-level user data access object.
#[async_trait]
pub trait UserDao: Send + Sync {
    /// Persists a new user. A duplicate email is reported as a conflict.
    async fn insert(&self, user: &NewUser) -> DocmanResult<User>;

    /// Finds a user by ID.
    async fn find_by_id(&self, id: UserId) -> DocmanResult<Option<User>>;

    /// Finds a user by email.
    async fn find_by_email(&self, email: &str) -> DocmanResult<Option<User>>;

    /// Checks if an email is already registered.
    async fn exists_by_email(&self, email: &str) -> DocmanResult<bool>;
}
