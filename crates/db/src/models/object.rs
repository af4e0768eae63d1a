//! Object rows and the read-only object projection.

use serde::Serialize;
use sitedesk_core::types::DbId;
use sqlx::FromRow;

use crate::models::object_status::ObjectStatus;

/// A row from the `objects` table.
#[derive(Debug, Clone, FromRow)]
pub struct Object {
    pub object_id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub status: Option<DbId>,
    pub deleted: bool,
}

/// Object data embedded in a project, with its status resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectDetails {
    pub object_id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub status: Option<ObjectStatus>,
    pub deleted: bool,
}

/// DTO for creating a new object.
#[derive(Debug, Clone)]
pub struct CreateObject {
    pub name: String,
    pub address: Option<String>,
    pub description: Option<String>,
    pub status: Option<DbId>,
}
