//! OpenAPI documentation configuration.
//!
//! Served as JSON at `/api-docs/openapi.json` and browsable at `/swagger-ui`.

use crate::controllers::HealthResponse;
use docman_core::{ErrorResponse, FieldError};
use docman_service::{
    DocumentPayload, DocumentResponse, LoginRequest, RegisterRequest, TokenResponse, UserResponse,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the docman API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Docman API",
        version = "1.0.0",
        description = "Document management REST API",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Document endpoints
        crate::controllers::document_controller::list_documents,
        crate::controllers::document_controller::get_document,
        crate::controllers::document_controller::create_document,
        crate::controllers::document_controller::update_document,
        crate::controllers::document_controller::delete_document,
        // User endpoints
        crate::controllers::auth_controller::register,
        crate::controllers::auth_controller::login,
        // Health endpoints
        crate::controllers::health_controller::health_check,
    ),
    components(
        schemas(
            ErrorResponse,
            FieldError,
            DocumentPayload,
            DocumentResponse,
            RegisterRequest,
            LoginRequest,
            UserResponse,
            TokenResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "documents", description = "Document endpoints (bearer token required)"),
        (name = "users", description = "Registration and login"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for JWT Bearer authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token from POST /api/user/login"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_paths_are_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/api/document", "/api/document/{id}", "/api/user/register", "/api/user/login", "/health"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {expected}");
        }
    }

    #[test]
    fn test_bearer_scheme_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer_auth"));
    }
}
