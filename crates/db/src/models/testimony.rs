//! Testimony model and DTOs.
//!
//! A testimony may be linked to a prison, a victim, or both. By convention
//! at least one link is supplied, but the contract does not enforce it.

use memorial_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Medium the testimony was recorded in. Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestimonyType {
    Written,
    Audio,
    Video,
}

impl TestimonyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TestimonyType::Written => "written",
            TestimonyType::Audio => "audio",
            TestimonyType::Video => "video",
        }
    }
}

/// A row from the `testimonies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimony {
    pub id: RecordId,
    pub prison_id: Option<RecordId>,
    pub victim_id: Option<RecordId>,
    pub text: String,
    pub audio_url: Option<String>,
    pub source: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub testimony_type: String,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/testimonies`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTestimony {
    pub prison_id: Option<RecordId>,
    pub victim_id: Option<RecordId>,
    pub text: String,
    pub audio_url: Option<String>,
    pub source: String,
    pub year: i32,
    #[serde(rename = "type")]
    pub testimony_type: TestimonyType,
}

/// Query parameters for `GET /api/testimonies`. All filters are combined
/// with AND.
#[derive(Debug, Deserialize)]
pub struct TestimonyListQuery {
    pub prison_id: Option<String>,
    pub victim_id: Option<String>,
    #[serde(rename = "type")]
    pub testimony_type: Option<String>,
    pub limit: Option<i64>,
}
