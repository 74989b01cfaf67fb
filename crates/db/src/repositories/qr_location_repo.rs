//! Repository for the `qr_locations` table. Read-only by design.

use sqlx::PgPool;

use crate::models::qr_location::QrLocation;

/// Column list for `qr_locations` queries.
const COLUMNS: &str = "qr_code, content_type, content_data, location_name";

/// Lookup operations for on-site QR codes.
pub struct QrLocationRepo;

impl QrLocationRepo {
    /// Find a QR location by its exact code.
    pub async fn find_by_code(pool: &PgPool, code: &str) -> Result<Option<QrLocation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM qr_locations WHERE qr_code = $1");
        sqlx::query_as::<_, QrLocation>(&query)
            .bind(code)
            .fetch_optional(pool)
            .await
    }
}
