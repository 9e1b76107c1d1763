//! JWT claims structure.

use chrono::{DateTime, Utc};
use docman_core::UserId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims bound to a user id and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as a string).
    pub sub: String,

    /// User ID.
    pub user_id: i64,

    /// User's email.
    pub email: String,

    /// Issued at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,

    /// Not before timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Issuer.
    pub iss: String,

    /// Audience.
    pub aud: String,

    /// JWT ID (unique identifier for this token).
    pub jti: String,
}

impl Claims {
    /// Creates claims for a freshly authenticated user.
    #[must_use]
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.to_string(),
            user_id: user_id.into_inner(),
            email: email.into(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            nbf: Some(now.timestamp()),
            iss: issuer.into(),
            aud: audience.into(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Returns the user ID.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        UserId(self.user_id)
    }

    /// Checks if the token is expired.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Returns the expiration time.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_claims_bind_user() {
        let expires = Utc::now() + Duration::hours(24);
        let claims = Claims::new(UserId(5), "a@example.com", "issuer", "audience", expires);

        assert_eq!(claims.sub, "5");
        assert_eq!(claims.user_id(), UserId(5));
        assert_eq!(claims.email, "a@example.com");
        assert!(!claims.is_expired());
        assert_eq!(claims.expires_at().timestamp(), expires.timestamp());
    }

    #[test]
    fn test_expired_claims() {
        let claims = Claims::new(
            UserId(1),
            "a@example.com",
            "issuer",
            "audience",
            Utc::now() - Duration::hours(1),
        );
        assert!(claims.is_expired());
    }

    #[test]
    fn test_each_token_gets_unique_id() {
        let expires = Utc::now() + Duration::hours(1);
        let a = Claims::new(UserId(1), "a@example.com", "i", "a", expires);
        let b = Claims::new(UserId(1), "a@example.com", "i", "a", expires);
        assert_ne!(a.jti, b.jti);
    }
}
