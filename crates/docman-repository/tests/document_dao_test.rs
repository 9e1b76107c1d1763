//! Integration tests for MySqlDocumentDaoImpl.
//!
//! These tests run against a real MySQL database using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use chrono::{DateTime, TimeZone, Utc};
use common::TestDatabase;
use docman_core::{DocumentData, DocumentId, ShippingStatus};
use docman_repository::{DatabasePool, DocumentDao, DocumentFilter, MySqlDocumentDaoImpl};

fn at(month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, month, day, 12, 0, 0).unwrap()
}

/// Seeds four rows: 1 and 3 titled "Specific ...", 3 soft-deleted.
async fn seed_fixture(pool: &DatabasePool) {
    let rows = [
        ("Specific Title A", 0, false, at(4, 23)),
        ("Other Title", 1, false, at(4, 25)),
        ("Specific Title B", 2, true, at(4, 25)),
        ("Another", 0, false, at(5, 1)),
    ];
    for (title, status, deleted, created_at) in rows {
        sqlx::query(
            "INSERT INTO documents (title, content, shipping_status, delete_flag, deleted_at, created_at, updated_at) \
             VALUES (?, 'Content', ?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind(status)
        .bind(deleted)
        .bind(deleted.then_some(created_at))
        .bind(created_at)
        .bind(created_at)
        .execute(pool.inner())
        .await
        .expect("Failed to seed document");
    }
}

fn ids(documents: &[docman_core::Document]) -> Vec<i64> {
    documents.iter().map(|d| d.id.into_inner()).collect()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_insert_and_find_by_id() {
    let db = TestDatabase::new().await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let created = dao
        .insert(&DocumentData::new("Title", "Content", ShippingStatus::SHIPPED))
        .await
        .expect("Failed to insert document");

    assert_eq!(created.title, "Title");
    assert_eq!(created.shipping_status, ShippingStatus::SHIPPED);
    assert!(!created.delete_flag);
    assert!(created.deleted_at.is_none());

    let found = dao
        .find_by_id(created.id)
        .await
        .expect("Query failed")
        .expect("Document not found");
    assert_eq!(found, created);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_find_by_id_not_found() {
    let db = TestDatabase::new().await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let result = dao.find_by_id(DocumentId(9999)).await.expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_title_filter_hides_soft_deleted_match() {
    let db = TestDatabase::new().await;
    seed_fixture(&db.pool()).await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let found = dao
        .find_many(&DocumentFilter::not_deleted().with_title_contains("Specific"))
        .await
        .expect("Query failed");

    assert_eq!(ids(&found), vec![1]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_title_filter_is_case_sensitive() {
    let db = TestDatabase::new().await;
    seed_fixture(&db.pool()).await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let found = dao
        .find_many(&DocumentFilter::not_deleted().with_title_contains("specific"))
        .await
        .expect("Query failed");

    assert!(found.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_shipping_status_zero_is_a_real_filter() {
    let db = TestDatabase::new().await;
    seed_fixture(&db.pool()).await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let found = dao
        .find_many(&DocumentFilter::not_deleted().with_shipping_status(ShippingStatus::NOT_SHIPPED))
        .await
        .expect("Query failed");

    assert_eq!(ids(&found), vec![1, 4]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_created_range_is_inclusive() {
    let db = TestDatabase::new().await;
    seed_fixture(&db.pool()).await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let filter = DocumentFilter::not_deleted()
        .with_created_from(at(4, 23))
        .with_created_to(at(4, 25));
    let found = dao.find_many(&filter).await.expect("Query failed");

    assert_eq!(ids(&found), vec![1, 2]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_empty_filter_returns_every_row() {
    let db = TestDatabase::new().await;
    seed_fixture(&db.pool()).await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let found = dao.find_many(&DocumentFilter::new()).await.expect("Query failed");

    assert_eq!(ids(&found), vec![1, 2, 3, 4]);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_replaces_fields() {
    let db = TestDatabase::new().await;
    seed_fixture(&db.pool()).await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let updated = dao
        .update(DocumentId(2), &DocumentData::new("New", "Body", ShippingStatus::DELIVERED))
        .await
        .expect("Query failed")
        .expect("Document not found");

    assert_eq!(updated.title, "New");
    assert_eq!(updated.content, "Body");
    assert_eq!(updated.shipping_status, ShippingStatus::DELIVERED);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_update_missing_row_is_none() {
    let db = TestDatabase::new().await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());

    let result = dao
        .update(DocumentId(42), &DocumentData::new("t", "c", ShippingStatus::NOT_SHIPPED))
        .await
        .expect("Query failed");

    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_soft_delete_keeps_row() {
    let db = TestDatabase::new().await;
    seed_fixture(&db.pool()).await;
    let dao = MySqlDocumentDaoImpl::new(db.pool());
    let when = at(6, 1);

    let deleted = dao
        .soft_delete(DocumentId(4), when)
        .await
        .expect("Query failed")
        .expect("Document not found");

    assert!(deleted.delete_flag);
    assert_eq!(deleted.deleted_at, Some(when));

    let visible = dao.find_many(&DocumentFilter::not_deleted()).await.expect("Query failed");
    assert_eq!(ids(&visible), vec![1, 2]);
    assert!(dao.find_by_id(DocumentId(4)).await.expect("Query failed").is_some());
}
