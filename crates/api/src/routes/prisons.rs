//! Prison routes mounted at `/prisons`.
//!
//! ```text
//! GET  /      -> list_prisons
//! POST /      -> create_prison
//! GET  /{id}  -> get_prison
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::prisons;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prisons::list_prisons).post(prisons::create_prison))
        .route("/{id}", get(prisons::get_prison))
}
