//! Response envelopes for the project endpoints.
//!
//! Every successful response carries a human-readable `msg`; endpoints that
//! return data add it next to the message under a named key.

use serde::Serialize;
use sitedesk_core::types::DbId;
use sitedesk_db::models::project::ProjectDetails;

/// `{ "msg": ... }`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub msg: String,
}

/// `{ "msg": ..., "project_id": ... }` returned after a project is added.
#[derive(Debug, Serialize)]
pub struct ProjectCreatedResponse {
    pub msg: String,
    pub project_id: DbId,
}

/// `{ "msg": ..., "project": { ... } }`
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub msg: String,
    pub project: ProjectDetails,
}

/// `{ "msg": ..., "projects": [ ... ] }`
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub msg: String,
    pub projects: Vec<ProjectDetails>,
}
