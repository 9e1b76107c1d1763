//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt::Debug;
use thiserror::Error;

/// Message returned to clients in place of any server-side failure detail.
pub const INTERNAL_ERROR_MESSAGE: &str = "an internal server error occurred";

/// Unified error type for all layers of docman.
///
/// Every layer returns this type. The REST boundary maps the variant to an
/// HTTP status exactly once via [`DocmanError::status_code`].
#[derive(Error, Debug)]
pub enum DocmanError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("{resource_type} with id {id} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Request payload failed validation
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    /// Path identifier is not a valid integer
    #[error("Invalid ID")]
    InvalidId(String),

    /// Malformed request input outside of body validation
    #[error("{0}")]
    BadRequest(String),

    /// Conflict error (e.g., duplicate entry)
    #[error("{0}")]
    Conflict(String),

    // ============ Authentication Errors ============
    /// Unauthorized access
    #[error("{0}")]
    Unauthorized(String),

    /// Invalid token
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Token expired
    #[error("token expired")]
    TokenExpired,

    // ============ Layer Errors ============
    /// Failure surfaced at the repository boundary
    #[error("{message}")]
    Repository {
        message: String,
        #[source]
        source: Box<DocmanError>,
    },

    /// Failure surfaced at the service boundary
    #[error("{message}")]
    Service {
        message: String,
        #[source]
        source: Box<DocmanError>,
    },

    // ============ Infrastructure Errors ============
    /// Database error
    #[error("database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DocmanError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Validation { .. } | Self::InvalidId(_) | Self::BadRequest(_) => 400,
            Self::Conflict(_) => 409,
            Self::Unauthorized(_) | Self::InvalidToken(_) | Self::TokenExpired => 401,
            Self::Repository { .. }
            | Self::Service { .. }
            | Self::Database(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::InvalidId(_) => "INVALID_ID",
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Conflict(_) => "CONFLICT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidToken(_) => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::Repository { .. } => "REPOSITORY_ERROR",
            Self::Service { .. } => "SERVICE_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true for server-side failures whose detail must not reach the client.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a validation error without field details.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Wraps a lower-level failure at the repository boundary.
    ///
    /// Client-facing kinds (not found, conflict, validation) pass through
    /// untouched so the REST boundary can still map them to their status.
    #[must_use]
    pub fn into_repository(self, message: impl Into<String>) -> Self {
        if self.is_internal() {
            Self::Repository {
                message: message.into(),
                source: Box::new(self),
            }
        } else {
            self
        }
    }

    /// Wraps a lower-level failure at the service boundary.
    #[must_use]
    pub fn into_service(self, message: impl Into<String>) -> Self {
        if self.is_internal() {
            Self::Service {
                message: message.into(),
                source: Box::new(self),
            }
        } else {
            self
        }
    }

    /// Renders the error together with every underlying cause, outermost first.
    #[must_use]
    pub fn report(&self) -> String {
        let mut report = self.to_string();
        let mut current = self.source();
        while let Some(cause) = current {
            report.push_str(": ");
            report.push_str(&cause.to_string());
            current = cause.source();
        }
        report
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for DocmanError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "row",
                id: "unknown".to_string(),
            },
            // MySQL reports ER_DUP_ENTRY (1062) under SQLSTATE 23000
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DocmanError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {err}"))
    }
}

/// Serializable error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub error: String,
    /// Field-level errors for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// Field-level validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FieldError {
    /// Field name
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
}

impl ErrorResponse {
    /// Builds the client-facing body for an error.
    ///
    /// Server-side failures are reduced to [`INTERNAL_ERROR_MESSAGE`].
    #[must_use]
    pub fn from_error(error: &DocmanError) -> Self {
        let message = if error.is_internal() {
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            error.to_string()
        };
        let errors = match error {
            DocmanError::Validation { fields, .. } if !fields.is_empty() => Some(fields.clone()),
            _ => None,
        };
        Self {
            code: error.error_code().to_string(),
            error: message,
            errors,
        }
    }

    /// Sets field-level validation errors.
    #[must_use]
    pub fn with_details(mut self, details: Vec<FieldError>) -> Self {
        self.errors = Some(details);
        self
    }
}

impl From<&DocmanError> for ErrorResponse {
    fn from(error: &DocmanError) -> Self {
        Self::from_error(error)
    }
}
