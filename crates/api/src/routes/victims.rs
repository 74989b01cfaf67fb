//! Victim routes mounted at `/victims`.
//!
//! ```text
//! GET  /      -> list_victims
//! POST /      -> create_victim
//! GET  /{id}  -> get_victim
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::victims;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(victims::list_victims).post(victims::create_victim))
        .route("/{id}", get(victims::get_victim))
}
