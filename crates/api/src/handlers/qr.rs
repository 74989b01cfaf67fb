//! Handler for on-site QR code scans.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use memorial_db::models::qr_location::{ScanRequest, ScanResponse};
use memorial_db::repositories::QrLocationRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/qr/scan
///
/// Look up a scanned code. An unregistered code is a valid outcome, not an
/// error: the visitor simply scanned something we do not know about.
pub async fn scan_qr_code(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> AppResult<impl IntoResponse> {
    let response = match QrLocationRepo::find_by_code(&state.pool, &request.qr_code).await? {
        Some(location) => ScanResponse::from_location(location),
        None => ScanResponse::invalid(),
    };

    Ok(Json(response))
}
