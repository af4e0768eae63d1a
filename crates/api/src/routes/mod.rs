pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /projects/add                          POST    add
/// /projects/all                          GET     list
/// /projects/{project_id}/view            GET     view
/// /projects/{project_id}/edit            PATCH   edit
/// /projects/{project_id}/delete/soft     PATCH   soft delete
/// /projects/{project_id}/delete/hard     DELETE  hard delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
