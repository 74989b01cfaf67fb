//! Handlers for archival documents.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use memorial_db::models::document::{CreateDocument, DocumentListQuery};
use memorial_db::repositories::DocumentRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/documents
///
/// List documents. Equality filters combine with AND; `year_from` and
/// `year_to` bound an inclusive year range.
pub async fn list_documents(
    State(state): State<AppState>,
    Query(params): Query<DocumentListQuery>,
) -> AppResult<impl IntoResponse> {
    let documents = DocumentRepo::list(&state.pool, &params).await?;

    Ok(Json(documents))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    Json(input): Json<CreateDocument>,
) -> AppResult<impl IntoResponse> {
    let document = DocumentRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %document.id, "Document created");

    Ok(Json(document))
}
