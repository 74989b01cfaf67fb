//! Root info and health routes.
//!
//! ```text
//! GET /        -> root
//! GET /health  -> health_check
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health_check))
}
