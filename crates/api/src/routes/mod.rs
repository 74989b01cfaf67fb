//! Route definitions.

pub mod documents;
pub mod events;
pub mod health;
pub mod prisons;
pub mod qr;
pub mod testimonies;
pub mod timeline;
pub mod victims;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /                        root info
/// /health                  database connectivity probe
///
/// /prisons                 list, create
/// /prisons/{id}            get
/// /victims                 list, create
/// /victims/{id}            get
/// /testimonies             list, create
/// /documents               list, create
/// /historical-timeline     list, create
/// /events                  list, create
/// /qr/scan                 scan lookup (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Root info and health probe.
        .merge(health::router())
        // Prison sites.
        .nest("/prisons", prisons::router())
        // Victims.
        .nest("/victims", victims::router())
        // Testimonies.
        .nest("/testimonies", testimonies::router())
        // Archival documents.
        .nest("/documents", documents::router())
        // Historical timeline events.
        .nest("/historical-timeline", timeline::router())
        // Public events.
        .nest("/events", events::router())
        // QR scan lookup.
        .nest("/qr", qr::router())
}
