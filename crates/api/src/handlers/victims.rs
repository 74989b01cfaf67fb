//! Handlers for victims.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use memorial_core::error::CoreError;
use memorial_db::models::victim::{CreateVictim, VictimListQuery};
use memorial_db::repositories::VictimRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/victims
///
/// List victims, optionally filtered by prison.
pub async fn list_victims(
    State(state): State<AppState>,
    Query(params): Query<VictimListQuery>,
) -> AppResult<impl IntoResponse> {
    let victims = VictimRepo::list(&state.pool, &params).await?;

    Ok(Json(victims))
}

/// GET /api/victims/{id}
pub async fn get_victim(
    State(state): State<AppState>,
    Path(victim_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let victim = VictimRepo::find_by_id(&state.pool, &victim_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Victim",
            id: victim_id,
        }))?;

    Ok(Json(victim))
}

/// POST /api/victims
///
/// Create a victim keyed by the slug of their name.
pub async fn create_victim(
    State(state): State<AppState>,
    Json(input): Json<CreateVictim>,
) -> AppResult<impl IntoResponse> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let victim = VictimRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %victim.id, "Victim created");

    Ok(Json(victim))
}
