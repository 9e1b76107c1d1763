//! Authentication middleware.

use crate::responses::AppError;
use axum::{
    body::Body,
    extract::State,
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use docman_core::DocmanError;
use docman_security::TokenProvider;
use std::sync::Arc;
use tracing::debug;

/// Message for requests without a bearer token.
pub const MISSING_TOKEN_MESSAGE: &str = "authentication token is missing, please log in";
/// Message for requests whose token fails verification.
pub const INVALID_TOKEN_MESSAGE: &str = "invalid token, please log in";

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_provider: Arc<TokenProvider>,
}

impl AuthMiddlewareState {
    #[must_use]
    pub fn new(token_provider: Arc<TokenProvider>) -> Self {
        Self { token_provider }
    }
}

/// Middleware that requires a valid bearer token.
///
/// Extracts the token from the `Authorization` header, verifies it and adds
/// the claims to the request extensions. Anything else short-circuits with
/// 401 and the handler never runs.
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(bearer_token)
        .ok_or_else(|| AppError(DocmanError::unauthorized(MISSING_TOKEN_MESSAGE)))?;

    let claims = state.token_provider.validate_token(token).map_err(|e| {
        debug!("Token validation failed: {}", e);
        AppError(DocmanError::unauthorized(INVALID_TOKEN_MESSAGE))
    })?;

    debug!("Authenticated user: {}", claims.user_id);
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

/// Token part of a `Bearer <token>` header value. The scheme is matched
/// case-insensitively.
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_scheme_is_case_insensitive() {
        assert_eq!(bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("BEARER  abc "), Some("abc"));
    }

    #[test]
    fn test_other_schemes_and_empty_tokens() {
        assert_eq!(bearer_token("Basic dXNlcjpwYXNz"), None);
        assert_eq!(bearer_token("Bearer "), None);
        assert_eq!(bearer_token("Bearer"), None);
        assert_eq!(bearer_token("abc"), None);
    }
}
