//! Integration tests for MySqlUserDaoImpl.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestDatabase;
use docman_core::{DocmanError, NewUser, UserId};
use docman_repository::{MySqlUserDaoImpl, UserDao};

fn new_user(email: &str) -> NewUser {
    NewUser::new("Test User", email, "hashed_password_123")
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_by_email() {
    let db = TestDatabase::new().await;
    let dao = MySqlUserDaoImpl::new(db.pool());

    let saved = dao.insert(&new_user("test@example.com")).await.expect("Failed to save user");
    assert_eq!(saved.email, "test@example.com");

    let found = dao
        .find_by_email("test@example.com")
        .await
        .expect("Query failed")
        .expect("User not found");

    assert_eq!(found.id, saved.id);
    assert_eq!(found.name, "Test User");
    assert_eq!(found.password_hash, "hashed_password_123");
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlUserDaoImpl::new(db.pool());

    let result = dao.find_by_id(UserId(9999)).await.expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_exists_by_email() {
    let db = TestDatabase::new().await;
    let dao = MySqlUserDaoImpl::new(db.pool());
    dao.insert(&new_user("exists@example.com")).await.expect("Failed to save user");

    assert!(dao.exists_by_email("exists@example.com").await.expect("Query failed"));
    assert!(!dao.exists_by_email("missing@example.com").await.expect("Query failed"));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_email_is_conflict() {
    let db = TestDatabase::new().await;
    let dao = MySqlUserDaoImpl::new(db.pool());
    dao.insert(&new_user("dup@example.com")).await.expect("Failed to save user");

    let err = dao.insert(&new_user("dup@example.com")).await.unwrap_err();

    assert!(matches!(err, DocmanError::Conflict(_)));
}
