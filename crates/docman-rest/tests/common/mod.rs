//! Shared setup for router tests.
//!
//! Wires the real services over the in-memory DAOs and drives the router
//! with `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use chrono::{TimeZone, Utc};
use docman_config::{SecurityConfig, ServerConfig};
use docman_core::{Document, DocumentId, ShippingStatus, UserId};
use docman_repository::{DocumentRepositoryImpl, InMemoryDocumentDao, InMemoryUserDao, UserRepositoryImpl};
use docman_rest::{create_router, AppState};
use docman_security::{PasswordHasher, TokenProvider};
use docman_service::{AuthServiceImpl, DocumentServiceImpl};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub documents: Arc<InMemoryDocumentDao>,
    pub users: Arc<InMemoryUserDao>,
    pub tokens: Arc<TokenProvider>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_documents(Vec::new())
    }

    pub fn with_documents(documents: Vec<Document>) -> Self {
        let documents = Arc::new(InMemoryDocumentDao::with_documents(documents));
        let users = Arc::new(InMemoryUserDao::new());
        let tokens = Arc::new(TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "router-test-secret".to_string(),
            jwt_expiration_secs: 3600,
            jwt_issuer: "docman-test".to_string(),
            jwt_audience: "docman-test-api".to_string(),
            password_hash_cost: 1,
        })));

        let document_service = Arc::new(DocumentServiceImpl::new(Arc::new(
            DocumentRepositoryImpl::new(documents.clone()),
        )));
        let auth_service = Arc::new(AuthServiceImpl::new(
            Arc::new(UserRepositoryImpl::new(users.clone())),
            Arc::new(PasswordHasher::with_cost(1)),
            tokens.clone(),
        ));

        let state = AppState::new(document_service, auth_service);
        let router = create_router(state, tokens.clone(), &ServerConfig::default());

        Self {
            router,
            documents,
            users,
            tokens,
        }
    }

    /// A valid token for user 1.
    pub fn token(&self) -> String {
        self.tokens
            .generate_token(UserId(1), "tester@example.com")
            .expect("token")
    }

    pub async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router.clone().oneshot(request).await.expect("router call")
    }

    /// Sends an authenticated request, with a JSON body when given.
    pub async fn call(&self, method: Method, uri: &str, body: Option<&str>) -> Response<Body> {
        let token = self.token();
        self.send(request(method, uri, body, Some(&token))).await
    }
}

pub fn request(method: Method, uri: &str, body: Option<&str>, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    }
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}

pub fn document(id: i64, title: &str, status: i32, deleted: bool, day: u32) -> Document {
    let created = Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap();
    Document {
        id: DocumentId(id),
        title: title.to_string(),
        content: format!("Content {id}"),
        shipping_status: ShippingStatus::new(status).unwrap(),
        delete_flag: deleted,
        deleted_at: deleted.then_some(created),
        created_at: created,
        updated_at: created,
    }
}

/// Four rows; 1 and 3 mention "Specific", 3 is soft-deleted.
pub fn fixture() -> Vec<Document> {
    vec![
        document(1, "Specific Title", 0, false, 23),
        document(2, "Other Title", 1, false, 24),
        document(3, "Another Specific", 2, true, 25),
        document(4, "Plain", 0, false, 26),
    ]
}
