//! Document id path extractor.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use docman_core::{DocmanError, DocumentId};

/// The `:id` path segment parsed as a [`DocumentId`].
///
/// Runs before any body extractor, so a non-numeric id is rejected with
/// 400 "Invalid ID" even when the body is invalid too.
#[derive(Debug, Clone, Copy)]
pub struct DocumentIdPath(pub DocumentId);

#[async_trait]
impl<S> FromRequestParts<S> for DocumentIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError(DocmanError::InvalidId(String::new())))?;

        Ok(Self(DocumentId::parse(&raw)?))
    }
}
