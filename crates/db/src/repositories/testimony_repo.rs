//! Repository for the `testimonies` table.

use memorial_core::paging::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::testimony::{CreateTestimony, Testimony, TestimonyListQuery};

/// Column list for `testimonies` queries.
const COLUMNS: &str = "id, prison_id, victim_id, text, audio_url, source, \
    year, testimony_type, created_at";

/// Read/insert operations for testimonies.
pub struct TestimonyRepo;

impl TestimonyRepo {
    /// Insert a new testimony with a generated id.
    pub async fn create(pool: &PgPool, input: &CreateTestimony) -> Result<Testimony, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        let query = format!(
            "INSERT INTO testimonies \
                (id, prison_id, victim_id, text, audio_url, source, year, testimony_type) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimony>(&query)
            .bind(&id)
            .bind(&input.prison_id)
            .bind(&input.victim_id)
            .bind(&input.text)
            .bind(&input.audio_url)
            .bind(&input.source)
            .bind(input.year)
            .bind(input.testimony_type.as_str())
            .fetch_one(pool)
            .await
    }

    /// List testimonies; all supplied filters are ANDed.
    pub async fn list(
        pool: &PgPool,
        params: &TestimonyListQuery,
    ) -> Result<Vec<Testimony>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

        let query = format!(
            "SELECT {COLUMNS} FROM testimonies \
             WHERE ($1::TEXT IS NULL OR prison_id = $1) \
               AND ($2::TEXT IS NULL OR victim_id = $2) \
               AND ($3::TEXT IS NULL OR testimony_type = $3) \
             LIMIT $4"
        );
        sqlx::query_as::<_, Testimony>(&query)
            .bind(&params.prison_id)
            .bind(&params.victim_id)
            .bind(&params.testimony_type)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
