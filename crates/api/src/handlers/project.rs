//! Handlers for the `/projects` resource.
//!
//! Reads are public; create/update/delete are gated by the admin
//! secret supplied in the request body.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::catalog::{CreateProject, ProjectFilter, UpdateProject};
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::ProjectRepo;

use crate::auth::{self, AdminSecret, Authenticated};
use crate::error::{AppError, AppResult};
use crate::response::{MessageResponse, ProjectListResponse, ProjectResponse};
use crate::state::AppState;

/// GET /api/projects
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<ProjectFilter>,
) -> AppResult<Json<ProjectListResponse>> {
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    let total = projects.len();
    Ok(Json(ProjectListResponse {
        success: true,
        projects,
        total,
    }))
}

/// GET /api/projects/{id}
///
/// A successful fetch counts as a view; the increment is persisted
/// before the response is returned.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepo::fetch_and_increment_views(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(ProjectResponse {
        success: true,
        project,
    }))
}

/// POST /api/projects/{id}/star
///
/// Anonymous and unthrottled: repeated calls keep incrementing. The
/// front end is responsible for not double-submitting.
pub async fn star(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepo::add_star(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(ProjectResponse {
        success: true,
        project,
    }))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<Authenticated<CreateProject>>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    auth::authorize(&state.config, input.secret.as_deref())?;
    let fields = input.body.validate()?;
    let project = ProjectRepo::create(&state.pool, &fields).await?;

    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(ProjectResponse {
            success: true,
            project,
        }),
    ))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<Authenticated<UpdateProject>>,
) -> AppResult<Json<ProjectResponse>> {
    auth::authorize(&state.config, input.secret.as_deref())?;
    let patch = input.body.validate()?;
    let project = ProjectRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(ProjectResponse {
        success: true,
        project,
    }))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AdminSecret>,
) -> AppResult<Json<MessageResponse>> {
    auth::authorize(&state.config, input.secret.as_deref())?;
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(Json(MessageResponse {
            success: true,
            message: "Project deleted successfully".into(),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
