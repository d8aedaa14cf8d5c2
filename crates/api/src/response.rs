//! Shared response envelope types for API handlers.
//!
//! Every success body carries `success: true` alongside its payload,
//! matching the contract the front end consumes. Use these instead of
//! ad-hoc `serde_json::json!` blocks for compile-time type safety.

use folio_db::models::project::Project;
use serde::Serialize;

/// `{ success, projects, total }` -- listing responses.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub success: bool,
    pub projects: Vec<Project>,
    pub total: usize,
}

/// `{ success, project }` -- single-project responses.
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub success: bool,
    pub project: Project,
}

/// `{ success, message }` -- acknowledgements without a payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
