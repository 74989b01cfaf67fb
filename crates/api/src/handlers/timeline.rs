//! Handlers for the historical timeline.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use memorial_db::models::historical_event::{CreateHistoricalEvent, HistoricalEventListQuery};
use memorial_db::repositories::HistoricalEventRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/historical-timeline
///
/// List timeline events in ascending date order, optionally filtered by
/// category.
pub async fn list_historical_events(
    State(state): State<AppState>,
    Query(params): Query<HistoricalEventListQuery>,
) -> AppResult<impl IntoResponse> {
    let events = HistoricalEventRepo::list(&state.pool, &params).await?;

    Ok(Json(events))
}

/// POST /api/historical-timeline
pub async fn create_historical_event(
    State(state): State<AppState>,
    Json(input): Json<CreateHistoricalEvent>,
) -> AppResult<impl IntoResponse> {
    let event = HistoricalEventRepo::create(&state.pool, &input).await?;

    tracing::info!(id = %event.id, "Historical event created");

    Ok(Json(event))
}
