//! Root info and health handlers.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Response payload for `GET /api/`.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `healthy` or `unhealthy`.
    pub status: &'static str,
    /// Whether the database is reachable: `connected` or `disconnected`.
    pub database: &'static str,
    /// Present only when the database ping failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /api/ -- service identity and liveness.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Memorial Gherla API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// GET /api/health -- pings the database and reports connectivity.
///
/// A failed ping is reported as a structured unhealthy status with a 200,
/// never as a fatal error.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    match memorial_db::health_check(&state.pool).await {
        Ok(()) => Json(HealthResponse {
            status: "healthy",
            database: "connected",
            error: None,
        }),
        Err(err) => {
            tracing::error!(error = %err, "Health check failed");
            Json(HealthResponse {
                status: "unhealthy",
                database: "disconnected",
                error: Some(err.to_string()),
            })
        }
    }
}
