//! Testimony routes mounted at `/testimonies`.
//!
//! ```text
//! GET  /  -> list_testimonies
//! POST /  -> create_testimony
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonies;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(testimonies::list_testimonies).post(testimonies::create_testimony),
    )
}
