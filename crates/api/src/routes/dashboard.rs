//! Route definitions for the admin dashboard and visitor counter.

use axum::routing::post;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// POST /visitor   -> record_visit (public)
/// POST /stats     -> stats (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/visitor", post(dashboard::record_visit))
        .route("/stats", post(dashboard::stats))
}
