//! Route definitions for the `/projects` resource.

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /add                          -> add
/// GET    /all                          -> list
/// GET    /{project_id}/view            -> view
/// PATCH  /{project_id}/edit            -> edit
/// PATCH  /{project_id}/delete/soft     -> soft_delete
/// DELETE /{project_id}/delete/hard     -> hard_delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(project::add))
        .route("/all", get(project::list))
        .route("/{project_id}/view", get(project::view))
        .route("/{project_id}/edit", patch(project::edit))
        .route("/{project_id}/delete/soft", patch(project::soft_delete))
        .route("/{project_id}/delete/hard", delete(project::hard_delete))
}
