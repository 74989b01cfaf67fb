//! Archival document model and DTOs.

use memorial_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Kind of archival document. Serialized snake_case on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Sentence,
    Letter,
    SecuritateFile,
    Photograph,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Sentence => "sentence",
            DocumentType::Letter => "letter",
            DocumentType::SecuritateFile => "securitate_file",
            DocumentType::Photograph => "photograph",
            DocumentType::Other => "other",
        }
    }
}

/// A row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: RecordId,
    pub title: String,
    pub document_type: String,
    pub scan_url: String,
    pub transcription: Option<String>,
    pub prison_id: Option<RecordId>,
    pub victim_id: Option<RecordId>,
    pub year: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for `POST /api/documents`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocument {
    pub title: String,
    pub document_type: DocumentType,
    pub scan_url: String,
    pub transcription: Option<String>,
    pub prison_id: Option<RecordId>,
    pub victim_id: Option<RecordId>,
    pub year: i32,
    pub description: Option<String>,
}

/// Query parameters for `GET /api/documents`.
///
/// `type` filters the `document_type` column; `year_from`/`year_to` are
/// independent inclusive bounds that combine into a range when both are
/// present.
#[derive(Debug, Deserialize)]
pub struct DocumentListQuery {
    #[serde(rename = "type")]
    pub document_type: Option<String>,
    pub prison_id: Option<String>,
    pub victim_id: Option<String>,
    pub year_from: Option<i32>,
    pub year_to: Option<i32>,
    pub limit: Option<i64>,
}
