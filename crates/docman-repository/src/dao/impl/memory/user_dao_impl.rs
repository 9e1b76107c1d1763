//! In-memory user DAO.

use crate::dao::UserDao;
use async_trait::async_trait;
use chrono::Utc;
use docman_core::{DocmanError, DocmanResult, NewUser, User, UserId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

/// User DAO holding rows in a `HashMap`. Enforces unique emails like the
/// `users` table does.
#[derive(Debug, Default)]
pub struct InMemoryUserDao {
    users: Mutex<HashMap<i64, User>>,
    failing: AtomicBool,
}

impl InMemoryUserDao {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles simulated outage mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<i64, User>> {
        self.users.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn check(&self) -> DocmanResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DocmanError::Database("simulated database outage".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserDao for InMemoryUserDao {
    async fn insert(&self, user: &NewUser) -> DocmanResult<User> {
        self.check()?;
        let mut users = self.lock();
        if users.values().any(|u| u.email == user.email) {
            return Err(DocmanError::conflict(format!("Duplicate entry '{}' for key 'users.email'", user.email)));
        }

        let id = users.keys().max().map_or(1, |last| last + 1);
        let now = Utc::now();
        let stored = User {
            id: UserId(id),
            name: user.name.clone(),
            email: user.email.clone(),
            password_hash: user.password_hash.clone(),
            created_at: now,
            updated_at: now,
        };
        users.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: UserId) -> DocmanResult<Option<User>> {
        self.check()?;
        Ok(self.lock().get(&id.into_inner()).cloned())
    }

    async fn find_by_email(&self, email: &str) -> DocmanResult<Option<User>> {
        self.check()?;
        Ok(self.lock().values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> DocmanResult<bool> {
        self.check()?;
        Ok(self.lock().values().any(|u| u.email == email))
    }
}
