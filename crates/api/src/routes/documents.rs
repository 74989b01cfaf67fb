//! Document routes mounted at `/documents`.
//!
//! ```text
//! GET  /  -> list_documents
//! POST /  -> create_document
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::documents;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(documents::list_documents).post(documents::create_document),
    )
}
