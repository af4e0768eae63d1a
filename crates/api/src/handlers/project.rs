//! Handlers for the `/projects` resource.
//!
//! Every handler authenticates first, validates its input second, and only
//! then runs a single repository operation.

use axum::extract::State;
use axum::Json;
use sitedesk_core::error::CoreError;
use sitedesk_core::types::DbId;
use sitedesk_db::models::project::{CreateProject, UpdateProject};
use sitedesk_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{PathParam, QueryParams, ValidatedJson};
use crate::middleware::auth::AuthUser;
use crate::query::ProjectFilterParams;
use crate::response::{
    MessageResponse, ProjectCreatedResponse, ProjectListResponse, ProjectResponse,
};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    })
}

/// POST /projects/add
pub async fn add(
    auth: AuthUser,
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<Json<ProjectCreatedResponse>> {
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(
        project_id = %project.project_id,
        user_id = %auth.user_id,
        "Project added"
    );
    Ok(Json(ProjectCreatedResponse {
        msg: "New project added successfully".to_string(),
        project_id: project.project_id,
    }))
}

/// GET /projects/{project_id}/view
pub async fn view(
    _auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ProjectRepo::find_details(&state.pool, project_id)
        .await?
        .ok_or_else(|| not_found(project_id))?;
    Ok(Json(ProjectResponse {
        msg: "Project found successfully".to_string(),
        project,
    }))
}

/// GET /projects/all
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ProjectFilterParams>,
) -> AppResult<Json<ProjectListResponse>> {
    let query = params.into_list_query()?;
    let projects = ProjectRepo::list_details(&state.pool, &query).await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(ProjectListResponse {
        msg: "Projects found successfully".to_string(),
        projects,
    }))
}

/// PATCH /projects/{project_id}/edit
pub async fn edit(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<MessageResponse>> {
    ProjectRepo::update(&state.pool, project_id, &input)
        .await?
        .ok_or_else(|| not_found(project_id))?;
    tracing::info!(%project_id, user_id = %auth.user_id, "Project edited");
    Ok(Json(MessageResponse {
        msg: "Project edited successfully".to_string(),
    }))
}

/// PATCH /projects/{project_id}/delete/soft
pub async fn soft_delete(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::soft_delete(&state.pool, project_id).await? {
        return Err(not_found(project_id));
    }
    tracing::info!(%project_id, user_id = %auth.user_id, "Project soft deleted");
    Ok(Json(MessageResponse {
        msg: format!("Project {project_id} soft deleted successfully"),
    }))
}

/// DELETE /projects/{project_id}/delete/hard
pub async fn hard_delete(
    auth: AuthUser,
    State(state): State<AppState>,
    PathParam(project_id): PathParam<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if !ProjectRepo::hard_delete(&state.pool, project_id).await? {
        return Err(not_found(project_id));
    }
    tracing::info!(
        %project_id,
        user_id = %auth.user_id,
        role = %auth.role,
        "Project hard deleted"
    );
    Ok(Json(MessageResponse {
        msg: format!("Project {project_id} hard deleted successfully"),
    }))
}
