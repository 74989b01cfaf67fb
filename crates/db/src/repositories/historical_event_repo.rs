//! Repository for the `historical_events` table.

use memorial_core::paging::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::historical_event::{
    CreateHistoricalEvent, HistoricalEvent, HistoricalEventListQuery,
};

/// Column list for `historical_events` queries. The wire field is `date`,
/// the column `event_date`.
const COLUMNS: &str = "id, event_date AS date, title, description, \
    related_prisons, category, images, created_at";

/// Read/insert operations for timeline events.
pub struct HistoricalEventRepo;

impl HistoricalEventRepo {
    /// Insert a new timeline event with a generated id.
    pub async fn create(
        pool: &PgPool,
        input: &CreateHistoricalEvent,
    ) -> Result<HistoricalEvent, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        let query = format!(
            "INSERT INTO historical_events \
                (id, event_date, title, description, related_prisons, category, images) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HistoricalEvent>(&query)
            .bind(&id)
            .bind(&input.date)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.related_prisons)
            .bind(input.category.as_str())
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// List timeline events in ascending lexical date order, with an
    /// optional category filter.
    pub async fn list(
        pool: &PgPool,
        params: &HistoricalEventListQuery,
    ) -> Result<Vec<HistoricalEvent>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

        let query = format!(
            "SELECT {COLUMNS} FROM historical_events \
             WHERE ($1::TEXT IS NULL OR category = $1) \
             ORDER BY event_date \
             LIMIT $2"
        );
        sqlx::query_as::<_, HistoricalEvent>(&query)
            .bind(&params.category)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
