//! Historical timeline event model and DTOs.
//!
//! Dates are stored as strings and sorted lexically, so callers supply
//! ISO-ordered values (`"1949-06-01"`, `"1948"`); the ordering of mixed
//! formats is undefined by contract.

use memorial_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Thematic category of a timeline event. Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Political,
    Resistance,
    Repression,
    Commemoration,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Political => "political",
            EventCategory::Resistance => "resistance",
            EventCategory::Repression => "repression",
            EventCategory::Commemoration => "commemoration",
        }
    }
}

/// A row from the `historical_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HistoricalEvent {
    pub id: RecordId,
    pub date: String,
    pub title: String,
    pub description: String,
    pub related_prisons: Vec<String>,
    pub category: String,
    pub images: Vec<String>,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/historical-timeline`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHistoricalEvent {
    pub date: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub related_prisons: Vec<String>,
    pub category: EventCategory,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Query parameters for `GET /api/historical-timeline`.
#[derive(Debug, Deserialize)]
pub struct HistoricalEventListQuery {
    pub category: Option<String>,
    pub limit: Option<i64>,
}
