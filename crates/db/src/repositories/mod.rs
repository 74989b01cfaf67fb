//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. List methods build a pure
//! conjunction of optional equality filters (plus the documented range and
//! threshold exceptions) and clamp the result count.

pub mod app_event_repo;
pub mod document_repo;
pub mod historical_event_repo;
pub mod prison_repo;
pub mod qr_location_repo;
pub mod testimony_repo;
pub mod victim_repo;

pub use app_event_repo::AppEventRepo;
pub use document_repo::DocumentRepo;
pub use historical_event_repo::HistoricalEventRepo;
pub use prison_repo::PrisonRepo;
pub use qr_location_repo::QrLocationRepo;
pub use testimony_repo::TestimonyRepo;
pub use victim_repo::VictimRepo;
