/// All record identifiers are opaque TEXT strings unique within their table.
///
/// Prisons and victims use a slug derived from the record name (see
/// [`crate::slug`]); every other record kind uses a UUIDv4 string.
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
