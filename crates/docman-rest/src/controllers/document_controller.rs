//! Document controller.
//!
//! Every route here sits behind the auth middleware.

use crate::{
    extractors::{AuthenticatedUser, DocumentIdPath, DocumentListQuery, SearchQuery, ValidatedJson},
    responses::{created, no_content, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use docman_core::ErrorResponse;
use docman_service::{DocumentPayload, DocumentResponse};
use tracing::{debug, info};

/// Creates the document router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_documents).post(create_document))
        .route(
            "/:id",
            get(get_document).put(update_document).delete(delete_document),
        )
}

/// List visible documents.
#[utoipa::path(
    get,
    path = "/api/document",
    tag = "documents",
    params(DocumentListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Matching documents", body = [DocumentResponse]),
        (status = 400, description = "Malformed number or date", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn list_documents(
    State(state): State<AppState>,
    SearchQuery(params): SearchQuery,
) -> ApiResult<Vec<DocumentResponse>> {
    debug!("List documents request: {:?}", params);

    let documents = state.document_service.search(params).await?;

    debug!("Returning {} documents", documents.len());
    ok(documents)
}

/// Get a document by ID.
///
/// Soft-deleted documents are returned too; an unknown id yields `null`.
#[utoipa::path(
    get,
    path = "/api/document/{id}",
    tag = "documents",
    params(("id" = i64, Path, description = "Document id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The document, or null when absent", body = DocumentResponse),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn get_document(
    State(state): State<AppState>,
    DocumentIdPath(id): DocumentIdPath,
) -> ApiResult<Option<DocumentResponse>> {
    debug!("Get document request: {}", id);

    let document = state.document_service.detail(id).await?;
    ok(document)
}

/// Create a document.
#[utoipa::path(
    post,
    path = "/api/document",
    tag = "documents",
    request_body = DocumentPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Document created", body = DocumentResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn create_document(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<DocumentPayload>,
) -> Result<(StatusCode, Json<DocumentResponse>), AppError> {
    let data = payload.into_data()?;
    let document = state.document_service.create(data).await?;

    info!(user_id = user.user_id, document_id = document.id, "Document created via API");
    Ok(created(document))
}

/// Replace a document's title, content and shipping status.
#[utoipa::path(
    put,
    path = "/api/document/{id}",
    tag = "documents",
    params(("id" = i64, Path, description = "Document id")),
    request_body = DocumentPayload,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Document updated", body = DocumentResponse),
        (status = 400, description = "Invalid ID or validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn update_document(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    DocumentIdPath(id): DocumentIdPath,
    ValidatedJson(payload): ValidatedJson<DocumentPayload>,
) -> ApiResult<DocumentResponse> {
    let data = payload.into_data()?;
    let document = state.document_service.update(id, data).await?;

    info!(user_id = user.user_id, document_id = document.id, "Document updated via API");
    ok(document)
}

/// Soft-delete a document.
#[utoipa::path(
    delete,
    path = "/api/document/{id}",
    tag = "documents",
    params(("id" = i64, Path, description = "Document id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal error", body = ErrorResponse)
    )
)]
pub async fn delete_document(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    DocumentIdPath(id): DocumentIdPath,
) -> Result<StatusCode, AppError> {
    state.document_service.delete(id).await?;

    info!(user_id = user.user_id, document_id = id.into_inner(), "Document deleted via API");
    Ok(no_content())
}
