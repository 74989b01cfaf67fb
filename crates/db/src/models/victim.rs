//! Victim model and DTOs.

use memorial_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

/// Years (as free-form strings, usually `"1948"`) bounding an imprisonment.
/// `end` is absent for people who died in detention with no recorded date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprisonmentPeriod {
    pub start: String,
    pub end: Option<String>,
}

/// A row from the `victims` table.
///
/// `testimonies` is a legacy back-reference list: it initializes empty and
/// no creation path appends to it. Query `testimonies?victim_id=` for the
/// actual testimony set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Victim {
    pub id: RecordId,
    pub prison_id: RecordId,
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub profession: String,
    pub biography: String,
    pub photo_url: Option<String>,
    pub testimonies: Vec<String>,
    pub imprisonment_period: Json<ImprisonmentPeriod>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for `POST /api/victims`. The id is derived from `name`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVictim {
    pub prison_id: RecordId,
    #[validate(length(min = 1, message = "name must be non-empty"))]
    pub name: String,
    pub birth_year: Option<i32>,
    pub death_year: Option<i32>,
    pub profession: String,
    pub biography: String,
    pub photo_url: Option<String>,
    pub imprisonment_period: ImprisonmentPeriod,
}

/// Query parameters for `GET /api/victims`.
#[derive(Debug, Deserialize)]
pub struct VictimListQuery {
    pub prison_id: Option<String>,
    pub limit: Option<i64>,
}
