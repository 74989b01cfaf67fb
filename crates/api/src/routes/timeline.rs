//! Historical timeline routes mounted at `/historical-timeline`.
//!
//! ```text
//! GET  /  -> list_historical_events
//! POST /  -> create_historical_event
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::timeline;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(timeline::list_historical_events).post(timeline::create_historical_event),
    )
}
