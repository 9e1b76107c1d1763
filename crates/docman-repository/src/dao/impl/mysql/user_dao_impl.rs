//! MySQL user DAO.

use crate::{dao::UserDao, DatabasePool};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use docman_core::{DocmanError, DocmanResult, NewUser, User, UserId};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// User DAO backed by the `users` table.
#[derive(Clone)]
pub struct MySqlUserDaoImpl {
    pool: Arc<DatabasePool>,
}

impl MySqlUserDaoImpl {
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserDao for MySqlUserDaoImpl {
    async fn insert(&self, user: &NewUser) -> DocmanResult<User> {
        debug!("Saving new user: {}", user.email);

        let result = sqlx::query(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .execute(self.pool.inner())
        .await?;

        let id = i64::try_from(result.last_insert_id())
            .map_err(|_| DocmanError::Internal("Generated user id out of range".to_string()))?;

        self.find_by_id(UserId(id))
            .await?
            .ok_or_else(|| DocmanError::Internal("Failed to fetch inserted user".to_string()))
    }

    async fn find_by_id(&self, id: UserId) -> DocmanResult<Option<User>> {
        debug!("Finding user by id: {}", id);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> DocmanResult<Option<User>> {
        debug!("Finding user by email: {}", email);

        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, name, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.pool.inner())
        .await?;

        Ok(row.map(User::from))
    }

    async fn exists_by_email(&self, email: &str) -> DocmanResult<bool> {
        let result: Option<i64> = sqlx::query_scalar("SELECT 1 FROM users WHERE email = ? LIMIT 1")
            .bind(email)
            .fetch_optional(self.pool.inner())
            .await?;

        Ok(result.is_some())
    }
}

impl std::fmt::Debug for MySqlUserDaoImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlUserDaoImpl").finish_non_exhaustive()
    }
}
