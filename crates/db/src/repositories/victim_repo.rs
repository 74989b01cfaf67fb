//! Repository for the `victims` table.

use memorial_core::paging::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use memorial_core::slug::slugify;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::victim::{CreateVictim, Victim, VictimListQuery};

/// Column list for `victims` queries.
const COLUMNS: &str = "id, prison_id, name, birth_year, death_year, profession, \
    biography, photo_url, testimonies, imprisonment_period, created_at, updated_at";

/// Read/insert operations for victims.
pub struct VictimRepo;

impl VictimRepo {
    /// Insert a new victim keyed by the slug of their name.
    ///
    /// The `testimonies` back-reference list initializes empty and is never
    /// maintained by any write path.
    pub async fn create(pool: &PgPool, input: &CreateVictim) -> Result<Victim, sqlx::Error> {
        let id = slugify(&input.name);

        let query = format!(
            "INSERT INTO victims \
                (id, prison_id, name, birth_year, death_year, profession, \
                 biography, photo_url, imprisonment_period) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Victim>(&query)
            .bind(&id)
            .bind(&input.prison_id)
            .bind(&input.name)
            .bind(input.birth_year)
            .bind(input.death_year)
            .bind(&input.profession)
            .bind(&input.biography)
            .bind(&input.photo_url)
            .bind(Json(&input.imprisonment_period))
            .fetch_one(pool)
            .await
    }

    /// Find a victim by their slug id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Victim>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM victims WHERE id = $1");
        sqlx::query_as::<_, Victim>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List victims with an optional prison filter.
    pub async fn list(pool: &PgPool, params: &VictimListQuery) -> Result<Vec<Victim>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

        let query = format!(
            "SELECT {COLUMNS} FROM victims \
             WHERE ($1::TEXT IS NULL OR prison_id = $1) \
             LIMIT $2"
        );
        sqlx::query_as::<_, Victim>(&query)
            .bind(&params.prison_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
