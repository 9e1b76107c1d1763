//! Authentication service: registration and login.

use crate::dto::{present, LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use async_trait::async_trait;
use docman_core::{DocmanError, DocmanResult, NewUser, ValidateExt};
use docman_repository::UserRepository;
use docman_security::{PasswordHasher, TokenProvider};
use std::sync::Arc;
use tracing::{debug, info, warn};

const FIELDS_REQUIRED: &str = "all fields are required";
const UNKNOWN_EMAIL: &str = "email address is incorrect";
const WRONG_PASSWORD: &str = "password is incorrect";

/// Authentication service trait.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new user.
    async fn register(&self, request: RegisterRequest) -> DocmanResult<UserResponse>;

    /// Checks credentials and issues an access token.
    async fn login(&self, request: LoginRequest) -> DocmanResult<TokenResponse>;
}

/// Authentication service implementation.
pub struct AuthServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<PasswordHasher>,
    token_provider: Arc<TokenProvider>,
}

impl AuthServiceImpl {
    /// Creates a new authentication service.
    #[must_use]
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        token_provider: Arc<TokenProvider>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl AuthService for AuthServiceImpl {
    async fn register(&self, request: RegisterRequest) -> DocmanResult<UserResponse> {
        request.validate_request()?;

        let (Some(name), Some(email), Some(password)) = (
            present(request.name),
            present(request.email),
            present(request.password),
        ) else {
            return Err(DocmanError::bad_request(FIELDS_REQUIRED));
        };

        debug!("Registering user: {}", email);

        if self
            .user_repository
            .exists_by_email(&email)
            .await
            .map_err(|e| e.into_service("failed to register user in auth service"))?
        {
            warn!("Registration rejected: email already exists - {}", email);
            return Err(DocmanError::conflict(format!("Email '{email}' already exists")));
        }

        let password_hash = self
            .password_hasher
            .hash(&password)
            .map_err(|e| e.into_service("failed to register user in auth service"))?;

        let user = self
            .user_repository
            .create(NewUser::new(name, email, password_hash))
            .await
            .map_err(|e| e.into_service("failed to register user in auth service"))?;

        info!("User registered: {}", user.id);
        Ok(UserResponse::from(user))
    }

    async fn login(&self, request: LoginRequest) -> DocmanResult<TokenResponse> {
        let (Some(email), Some(password)) = (present(request.email), present(request.password)) else {
            return Err(DocmanError::bad_request(FIELDS_REQUIRED));
        };

        debug!("Login attempt for: {}", email);

        let user = self
            .user_repository
            .find_by_email(&email)
            .await
            .map_err(|e| e.into_service("failed to log in in auth service"))?
            .ok_or_else(|| {
                warn!("Login failed: user not found - {}", email);
                DocmanError::unauthorized(UNKNOWN_EMAIL)
            })?;

        let verified = self
            .password_hasher
            .verify(&password, &user.password_hash)
            .map_err(|e| e.into_service("failed to log in in auth service"))?;
        if !verified {
            warn!("Login failed: invalid password - {}", user.id);
            return Err(DocmanError::unauthorized(WRONG_PASSWORD));
        }

        let token = self
            .token_provider
            .generate_token(user.id, &user.email)
            .map_err(|e| e.into_service("failed to log in in auth service"))?;

        info!("User logged in: {}", user.id);
        Ok(TokenResponse { token })
    }
}

impl std::fmt::Debug for AuthServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthServiceImpl").finish_non_exhaustive()
    }
}
