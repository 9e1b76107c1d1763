//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use docman_core::{DocmanError, ErrorResponse};
use serde::Serialize;
use tracing::{error, warn};

/// Application error type for Axum.
///
/// The single place where an error kind becomes an HTTP status. Server-side
/// failures are logged with their full cause chain and reach the client only
/// as a generic message.
#[derive(Debug)]
pub struct AppError(pub DocmanError);

impl From<DocmanError> for AppError {
    fn from(err: DocmanError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.0.is_internal() {
            error!(code = self.0.error_code(), error = %self.0.report(), "Request failed");
        } else {
            warn!(code = self.0.error_code(), status = status.as_u16(), "Request rejected: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

/// Helper to create a no content (204) response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
