pub mod dashboard;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /projects                list (GET), create (POST, admin)
/// /projects/{id}           get (GET), update (PUT, admin), delete (DELETE, admin)
/// /projects/{id}/star      star (POST)
///
/// /dashboard/visitor       count a visit (POST)
/// /dashboard/stats         aggregate stats (POST, admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/dashboard", dashboard::router())
}
