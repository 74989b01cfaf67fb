//! Repository for the `app_events` table.

use memorial_core::paging::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::app_event::{AppEvent, CreateAppEvent};

/// Column list for `app_events` queries. The wire field is `date`, the
/// column `event_date`.
const COLUMNS: &str = "id, title, description, event_date AS date, location, \
    prison_id, event_type, registration_url, created_at";

/// Read/insert operations for public events.
pub struct AppEventRepo;

impl AppEventRepo {
    /// Insert a new event with a generated id.
    pub async fn create(pool: &PgPool, input: &CreateAppEvent) -> Result<AppEvent, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        let query = format!(
            "INSERT INTO app_events \
                (id, title, description, event_date, location, prison_id, \
                 event_type, registration_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AppEvent>(&query)
            .bind(&id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.date)
            .bind(&input.location)
            .bind(&input.prison_id)
            .bind(&input.event_type)
            .bind(&input.registration_url)
            .fetch_one(pool)
            .await
    }

    /// List events in ascending lexical date order.
    ///
    /// When `since` is supplied, only events whose date string compares
    /// `>= since` are returned; the caller passes the current time in the
    /// same ISO layout the stored dates use.
    pub async fn list(
        pool: &PgPool,
        since: Option<&str>,
        limit: Option<i64>,
    ) -> Result<Vec<AppEvent>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

        let query = format!(
            "SELECT {COLUMNS} FROM app_events \
             WHERE ($1::TEXT IS NULL OR event_date >= $1) \
             ORDER BY event_date \
             LIMIT $2"
        );
        sqlx::query_as::<_, AppEvent>(&query)
            .bind(since)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
