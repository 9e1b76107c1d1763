//! Authentication-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration request.
///
/// Presence of every field is checked by the service so that a missing
/// field and an empty one produce the same response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(length(max = 255, message = "name must be at most 255 characters"))]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,

    #[validate(length(max = 255, message = "email must be at most 255 characters"))]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[schema(example = "correct horse battery staple")]
    pub password: Option<String>,
}

/// Login request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    pub password: Option<String>,
}

/// Registered user, without credentials.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Issued access token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Returns the value when it is present and not blank.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
