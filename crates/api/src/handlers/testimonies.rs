//! Handlers for testimonies.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use memorial_db::models::testimony::{CreateTestimony, TestimonyListQuery};
use memorial_db::repositories::TestimonyRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/testimonies
///
/// List testimonies. `prison_id`, `victim_id`, and `type` filters combine
/// with AND.
pub async fn list_testimonies(
    State(state): State<AppState>,
    Query(params): Query<TestimonyListQuery>,
) -> AppResult<impl IntoResponse> {
    let testimonies = TestimonyRepo::list(&state.pool, &params).await?;

    Ok(Json(testimonies))
}

/// POST /api/testimonies
pub async fn create_testimony(
    State(state): State<AppState>,
    Json(input): Json<CreateTestimony>,
) -> AppResult<impl IntoResponse> {
    let testimony = TestimonyRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %testimony.id, "Testimony created");

    Ok(Json(testimony))
}
