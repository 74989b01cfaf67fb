//! Public event routes mounted at `/events`.
//!
//! ```text
//! GET  /  -> list_events
//! POST /  -> create_event
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::events;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(events::list_events).post(events::create_event))
}
