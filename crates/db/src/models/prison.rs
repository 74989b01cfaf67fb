//! Prison site model and DTOs.
//!
//! A prison record is the richest shape in the system: nested coordinates,
//! a historical timeline, optional visiting information, and the on-site
//! media lists (`images`, `qr_codes`, `audio_tour_tracks`). The media lists
//! are server-managed: they initialize empty on create and no API path
//! appends to them.

use memorial_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// Kind of site. Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrisonType {
    Memorial,
    Prison,
    Camp,
}

impl PrisonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrisonType::Memorial => "memorial",
            PrisonType::Prison => "prison",
            PrisonType::Camp => "camp",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// One entry in a prison's history timeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub date: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// Practical visiting information. `contact` is a free-form map
/// (phone/email/anything the curators add), so it stays opaque JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitInfo {
    pub address: String,
    pub schedule: Option<String>,
    pub price: Option<String>,
    pub contact: Option<serde_json::Value>,
    pub facilities: Option<Vec<String>>,
}

/// One stop of the on-site audio tour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTrack {
    pub id: String,
    pub title: String,
    pub duration: i32,
    pub audio_url: String,
    pub transcript: Option<String>,
    pub location: Option<Coordinates>,
}

/// A row from the `prisons` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Prison {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub prison_type: String,
    pub coordinates: Json<Coordinates>,
    pub description: String,
    pub history_timeline: Json<Vec<TimelineEvent>>,
    pub operational_years: Vec<i32>,
    pub estimated_victims: i32,
    pub visit_info: Option<Json<VisitInfo>>,
    pub images: Vec<String>,
    pub qr_codes: Vec<String>,
    pub audio_tour_tracks: Json<Vec<AudioTrack>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /api/prisons`. The id is derived from `name`, timestamps
/// and media lists are server-assigned.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePrison {
    #[validate(length(min = 1, message = "name must be non-empty"))]
    pub name: String,
    #[serde(rename = "type")]
    pub prison_type: PrisonType,
    pub coordinates: Coordinates,
    pub description: String,
    #[serde(default)]
    pub history_timeline: Vec<TimelineEvent>,
    pub operational_years: Vec<i32>,
    #[validate(range(min = 0, message = "estimated_victims must be non-negative"))]
    pub estimated_victims: i32,
    pub visit_info: Option<VisitInfo>,
}

/// Query parameters for `GET /api/prisons`.
#[derive(Debug, Deserialize)]
pub struct PrisonListQuery {
    #[serde(rename = "type")]
    pub prison_type: Option<String>,
    pub limit: Option<i64>,
}
