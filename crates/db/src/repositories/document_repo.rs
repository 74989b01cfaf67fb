//! Repository for the `documents` table.

use memorial_core::paging::{clamp_limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::document::{CreateDocument, Document, DocumentListQuery};

/// Column list for `documents` queries.
const COLUMNS: &str = "id, title, document_type, scan_url, transcription, \
    prison_id, victim_id, year, description, created_at";

/// Read/insert operations for archival documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document with a generated id.
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let id = Uuid::new_v4().to_string();

        let query = format!(
            "INSERT INTO documents \
                (id, title, document_type, scan_url, transcription, \
                 prison_id, victim_id, year, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(&id)
            .bind(&input.title)
            .bind(input.document_type.as_str())
            .bind(&input.scan_url)
            .bind(&input.transcription)
            .bind(&input.prison_id)
            .bind(&input.victim_id)
            .bind(input.year)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List documents; equality filters AND the inclusive year range.
    pub async fn list(
        pool: &PgPool,
        params: &DocumentListQuery,
    ) -> Result<Vec<Document>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);

        let query = format!(
            "SELECT {COLUMNS} FROM documents \
             WHERE ($1::TEXT IS NULL OR document_type = $1) \
               AND ($2::TEXT IS NULL OR prison_id = $2) \
               AND ($3::TEXT IS NULL OR victim_id = $3) \
               AND ($4::INTEGER IS NULL OR year >= $4) \
               AND ($5::INTEGER IS NULL OR year <= $5) \
             LIMIT $6"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(&params.document_type)
            .bind(&params.prison_id)
            .bind(&params.victim_id)
            .bind(params.year_from)
            .bind(params.year_to)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
