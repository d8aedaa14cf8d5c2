//! Route definitions for the `/projects` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create (admin)
/// GET    /{id}        -> get_by_id (counts a view)
/// PUT    /{id}        -> update (admin)
/// DELETE /{id}        -> delete (admin)
/// POST   /{id}/star   -> star
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/star", post(project::star))
}
