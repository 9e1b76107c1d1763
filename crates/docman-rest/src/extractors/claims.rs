//! Authenticated user extractor.

use crate::middleware::MISSING_TOKEN_MESSAGE;
use crate::responses::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use docman_core::DocmanError;
use docman_security::Claims;

/// Claims of the caller, as verified by
/// [`auth_middleware`](crate::middleware::auth_middleware).
///
/// Rejects with 401 when used on a route the middleware does not cover.
pub struct AuthenticatedUser(pub Claims);

impl std::ops::Deref for AuthenticatedUser {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError(DocmanError::unauthorized(MISSING_TOKEN_MESSAGE)))
    }
}
