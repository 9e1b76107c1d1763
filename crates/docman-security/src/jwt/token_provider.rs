//! JWT token provider for creating and validating tokens.

use super::Claims;
use chrono::{Duration, Utc};
use docman_config::SecurityConfig;
use docman_core::{DocmanError, DocmanResult, UserId};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;
use tracing::{debug, warn};

/// JWT token provider service (HS256).
#[derive(Clone)]
pub struct TokenProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    config: Arc<SecurityConfig>,
    validation: Validation,
}

impl TokenProvider {
    /// Creates a new token provider.
    #[must_use]
    pub fn new(config: Arc<SecurityConfig>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.jwt_issuer]);
        validation.set_audience(&[&config.jwt_audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            encoding_key,
            decoding_key,
            config,
            validation,
        }
    }

    /// Returns the configured token lifetime in seconds.
    #[must_use]
    pub fn expires_in(&self) -> u64 {
        self.config.jwt_expiration_secs
    }

    /// Issues a signed token for a user.
    pub fn generate_token(&self, user_id: UserId, email: &str) -> DocmanResult<String> {
        let expires_at = i64::try_from(self.config.jwt_expiration_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                DocmanError::Configuration(format!(
                    "JWT expiration of {} seconds is out of range",
                    self.config.jwt_expiration_secs
                ))
            })?;

        let claims = Claims::new(
            user_id,
            email,
            self.config.jwt_issuer.as_str(),
            self.config.jwt_audience.as_str(),
            expires_at,
        );

        self.encode(&claims)
    }

    /// Signs an arbitrary set of claims.
    pub fn encode(&self, claims: &Claims) -> DocmanResult<String> {
        let token = encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| DocmanError::Internal(format!("Failed to generate token: {e}")))?;

        debug!("Generated token for user {}", claims.sub);
        Ok(token)
    }

    /// Validates a token and returns the claims.
    pub fn validate_token(&self, token: &str) -> DocmanResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            warn!("Token validation failed: {}", e);
            match e.kind() {
                ErrorKind::ExpiredSignature => DocmanError::TokenExpired,
                ErrorKind::InvalidToken | ErrorKind::InvalidSignature => {
                    DocmanError::InvalidToken("Invalid token signature".to_string())
                }
                ErrorKind::InvalidIssuer => DocmanError::InvalidToken("Invalid token issuer".to_string()),
                ErrorKind::InvalidAudience => DocmanError::InvalidToken("Invalid token audience".to_string()),
                _ => DocmanError::InvalidToken(e.to_string()),
            }
        })?;

        Ok(token_data.claims)
    }
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("issuer", &self.config.jwt_issuer)
            .field("audience", &self.config.jwt_audience)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SecurityConfig {
        SecurityConfig {
            jwt_secret: "test-secret-key-for-testing-only".to_string(),
            jwt_expiration_secs: 86_400,
            jwt_issuer: "test-issuer".to_string(),
            jwt_audience: "test-audience".to_string(),
            ..Default::default()
        }
    }

    fn create_test_provider() -> TokenProvider {
        TokenProvider::new(Arc::new(test_config()))
    }

    #[test]
    fn test_generate_and_validate_token() {
        let provider = create_test_provider();

        let token = provider.generate_token(UserId(42), "user@example.com").unwrap();
        let claims = provider.validate_token(&token).unwrap();

        assert_eq!(claims.user_id(), UserId(42));
        assert_eq!(claims.email, "user@example.com");
        assert_eq!(claims.iss, "test-issuer");
        assert_eq!(claims.exp - claims.iat, 86_400);
    }

    #[test]
    fn test_expired_token() {
        let provider = create_test_provider();
        let claims = Claims::new(
            UserId(1),
            "user@example.com",
            "test-issuer",
            "test-audience",
            Utc::now() - Duration::hours(2),
        );
        let token = provider.encode(&claims).unwrap();

        assert!(matches!(provider.validate_token(&token), Err(DocmanError::TokenExpired)));
    }

    #[test]
    fn test_token_signed_with_other_secret() {
        let provider = create_test_provider();
        let other = TokenProvider::new(Arc::new(SecurityConfig {
            jwt_secret: "another-secret".to_string(),
            ..test_config()
        }));
        let token = other.generate_token(UserId(1), "user@example.com").unwrap();

        assert!(matches!(provider.validate_token(&token), Err(DocmanError::InvalidToken(_))));
    }

    #[test]
    fn test_wrong_audience() {
        let provider = create_test_provider();
        let other = TokenProvider::new(Arc::new(SecurityConfig {
            jwt_audience: "someone-else".to_string(),
            ..test_config()
        }));
        let token = other.generate_token(UserId(1), "user@example.com").unwrap();

        assert!(provider.validate_token(&token).is_err());
    }

    #[test]
    fn test_out_of_range_lifetime_is_an_error() {
        let provider = TokenProvider::new(Arc::new(SecurityConfig {
            jwt_expiration_secs: u64::MAX,
            ..test_config()
        }));

        let result = provider.generate_token(UserId(1), "user@example.com");

        assert!(matches!(result, Err(DocmanError::Configuration(_))));
    }

    #[test]
    fn test_invalid_token() {
        let provider = create_test_provider();
        let result = provider.validate_token("invalid-token");
        assert!(matches!(result, Err(DocmanError::InvalidToken(_))));
    }

    #[test]
    fn test_debug_hides_keys() {
        let debug = format!("{:?}", create_test_provider());
        assert!(debug.contains("test-issuer"));
        assert!(!debug.contains("test-secret"));
    }
}
