//! QR lookup model and scan DTOs.
//!
//! QR locations are provisioned out of band (seed migrations, operators);
//! the API only ever reads them. A scan miss is a defined non-error
//! outcome, which is why [`ScanResponse`] models it as `valid: false`
//! rather than a 404.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `qr_locations` table. `content_data` is an opaque map
/// whose shape depends on `content_type` (audio URLs, AR model refs, ...).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QrLocation {
    pub qr_code: String,
    pub content_type: String,
    pub content_data: serde_json::Value,
    pub location_name: String,
}

/// Body of `POST /api/qr/scan`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub qr_code: String,
}

/// Response of `POST /api/qr/scan`. On a miss only `valid` is present;
/// on a hit the stored content fields are passed through untransformed.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
}

impl ScanResponse {
    /// The miss response: `{"valid": false}` with no content fields.
    pub fn invalid() -> Self {
        Self {
            valid: false,
            content_type: None,
            content_data: None,
            location_name: None,
        }
    }

    /// The hit response: stored fields passed through as-is.
    pub fn from_location(location: QrLocation) -> Self {
        Self {
            valid: true,
            content_type: Some(location.content_type),
            content_data: Some(location.content_data),
            location_name: Some(location.location_name),
        }
    }
}
