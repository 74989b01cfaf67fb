//! Handlers for prison sites.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use memorial_core::error::CoreError;
use memorial_db::models::prison::{CreatePrison, PrisonListQuery};
use memorial_db::repositories::PrisonRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/prisons
///
/// List prison sites, optionally filtered by site type.
pub async fn list_prisons(
    State(state): State<AppState>,
    Query(params): Query<PrisonListQuery>,
) -> AppResult<impl IntoResponse> {
    let prisons = PrisonRepo::list(&state.pool, &params).await?;

    Ok(Json(prisons))
}

/// GET /api/prisons/{id}
pub async fn get_prison(
    State(state): State<AppState>,
    Path(prison_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let prison = PrisonRepo::find_by_id(&state.pool, &prison_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prison",
            id: prison_id,
        }))?;

    Ok(Json(prison))
}

/// POST /api/prisons
///
/// Create a prison site keyed by the slug of its name.
pub async fn create_prison(
    State(state): State<AppState>,
    Json(input): Json<CreatePrison>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let prison = PrisonRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %prison.id, "Prison created");

    Ok(Json(prison))
}
