//! QR scan routes mounted at `/qr`.
//!
//! ```text
//! POST /scan  -> scan_qr_code
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::qr;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/scan", post(qr::scan_qr_code))
}
