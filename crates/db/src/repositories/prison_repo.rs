//! Repository for the `prisons` table.

use memorial_core::paging::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use memorial_core::slug::slugify;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::prison::{CreatePrison, Prison, PrisonListQuery};

/// Column list for `prisons` queries.
const COLUMNS: &str = "id, name, prison_type, coordinates, description, \
    history_timeline, operational_years, estimated_victims, visit_info, \
    images, qr_codes, audio_tour_tracks, created_at, updated_at";

/// Read/insert operations for prison sites.
pub struct PrisonRepo;

impl PrisonRepo {
    /// Insert a new prison keyed by the slug of its name.
    ///
    /// Media lists and timestamps come from column defaults, so
    /// `updated_at` equals `created_at` on the returned record. A slug
    /// collision surfaces as a unique-key violation.
    pub async fn create(pool: &PgPool, input: &CreatePrison) -> Result<Prison, sqlx::Error> {
        let id = slugify(&input.name);

        let query = format!(
            "INSERT INTO prisons \
                (id, name, prison_type, coordinates, description, \
                 history_timeline, operational_years, estimated_victims, visit_info) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prison>(&query)
            .bind(&id)
            .bind(&input.name)
            .bind(input.prison_type.as_str())
            .bind(Json(&input.coordinates))
            .bind(&input.description)
            .bind(Json(&input.history_timeline))
            .bind(&input.operational_years)
            .bind(input.estimated_victims)
            .bind(input.visit_info.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }

    /// Find a prison by its slug id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Prison>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prisons WHERE id = $1");
        sqlx::query_as::<_, Prison>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List prisons with an optional site-type filter.
    pub async fn list(pool: &PgPool, params: &PrisonListQuery) -> Result<Vec<Prison>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

        let query = format!(
            "SELECT {COLUMNS} FROM prisons \
             WHERE ($1::TEXT IS NULL OR prison_type = $1) \
             LIMIT $2"
        );
        sqlx::query_as::<_, Prison>(&query)
            .bind(&params.prison_type)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
