//! Handlers for public events (commemorations, conferences, exhibitions).

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use memorial_db::models::app_event::{AppEventListQuery, CreateAppEvent};
use memorial_db::repositories::AppEventRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/events
///
/// List events in ascending date order. With `upcoming=true`, only events
/// whose date string is `>=` the current time are returned. The threshold
/// uses the same naive-ISO layout the stored dates carry, so the
/// comparison stays purely lexical.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<AppEventListQuery>,
) -> AppResult<impl IntoResponse> {
    let since = params
        .upcoming
        .then(|| chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string());

    let events = AppEventRepo::list(&state.pool, since.as_deref(), params.limit).await?;

    Ok(Json(events))
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    Json(input): Json<CreateAppEvent>,
) -> AppResult<impl IntoResponse> {
    let event = AppEventRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %event.id, "Event created");

    Ok(Json(event))
}
