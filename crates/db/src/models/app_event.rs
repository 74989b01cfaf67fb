//! Public event model and DTOs (commemorations, conferences, exhibitions).
//!
//! Unlike historical timeline categories, the event `type` here is curator
//! free text, so it stays a plain string end to end.

use memorial_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `app_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AppEvent {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub prison_id: Option<RecordId>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub registration_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/events`. `date` is an ISO datetime string; the
/// `upcoming` filter compares it lexically against the current time.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAppEvent {
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub prison_id: Option<RecordId>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub registration_url: Option<String>,
}

/// Query parameters for `GET /api/events`.
#[derive(Debug, Deserialize)]
pub struct AppEventListQuery {
    #[serde(default)]
    pub upcoming: bool,
    pub limit: Option<i64>,
}
