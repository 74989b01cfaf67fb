//! Record models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` record struct matching the table row
//! - A `Deserialize` create DTO for the POST endpoint
//! - A `Deserialize` query-params struct for the list endpoint
//!
//! Wire field names match the public API contract (`type`, `date`), while
//! the Rust fields and table columns use unambiguous names
//! (`prison_type`, `event_date`).

pub mod app_event;
pub mod document;
pub mod historical_event;
pub mod prison;
pub mod qr_location;
pub mod testimony;
pub mod victim;
