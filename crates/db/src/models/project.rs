//! Project entity model, DTOs and the joined read projection.

use serde::{Deserialize, Deserializer, Serialize};
use sitedesk_core::listing::SortOrder;
use sitedesk_core::project::ProjectSortField;
use sitedesk_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use crate::models::object::ObjectDetails;
use crate::models::object_status::ObjectStatus;
use crate::models::user::UserSummary;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub project_id: DbId,
    pub name: String,
    pub object: DbId,
    pub project_leader: Option<DbId>,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
    /// Id of the object this project belongs to.
    pub object: DbId,
    /// Id of the leading user, if any.
    pub project_leader: Option<DbId>,
}

/// DTO for editing an existing project. All fields are optional; omitted
/// fields keep their stored value.
///
/// `project_leader` distinguishes an omitted key (`None`, keep) from an
/// explicit `null` (`Some(None)`, clear the leader).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: Option<String>,
    pub object: Option<DbId>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub project_leader: Option<Option<DbId>>,
}

/// Deserialize a key that is present in the body, keeping `null` as
/// `Some(None)`. Absent keys fall back to `None` through `#[serde(default)]`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// A project with its object (and the object's status) and its leader
/// resolved. This is the shape returned by the view and list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDetails {
    pub project_id: DbId,
    pub name: String,
    pub object: ObjectDetails,
    pub project_leader: Option<UserSummary>,
    pub deleted: bool,
}

/// Flat row produced by the project/object/status/user join.
#[derive(Debug, FromRow)]
pub(crate) struct ProjectDetailsRow {
    project_id: DbId,
    name: String,
    deleted: bool,
    object_id: DbId,
    object_name: String,
    object_address: Option<String>,
    object_description: Option<String>,
    object_deleted: bool,
    status_id: Option<DbId>,
    status_name: Option<String>,
    leader_user_id: Option<DbId>,
    leader_login: Option<String>,
    leader_name: Option<String>,
    leader_role: Option<String>,
    leader_deleted: Option<bool>,
}

impl From<ProjectDetailsRow> for ProjectDetails {
    fn from(row: ProjectDetailsRow) -> Self {
        let status = match (row.status_id, row.status_name) {
            (Some(object_status_id), Some(name)) => Some(ObjectStatus {
                object_status_id,
                name,
            }),
            _ => None,
        };

        let project_leader = match (
            row.leader_user_id,
            row.leader_login,
            row.leader_name,
            row.leader_role,
        ) {
            (Some(user_id), Some(login), Some(name), Some(role)) => Some(UserSummary {
                user_id,
                login,
                name,
                role,
                deleted: row.leader_deleted.unwrap_or(false),
            }),
            _ => None,
        };

        Self {
            project_id: row.project_id,
            name: row.name,
            object: ObjectDetails {
                object_id: row.object_id,
                name: row.object_name,
                address: row.object_address,
                description: row.object_description,
                status,
                deleted: row.object_deleted,
            },
            project_leader,
            deleted: row.deleted,
        }
    }
}

/// Filters, sorting and pagination for listing projects.
///
/// `limit` and `offset` are expected to be clamped already.
#[derive(Debug, Clone)]
pub struct ProjectListQuery {
    /// Case-insensitive substring match on the project name.
    pub name: Option<String>,
    /// When set, only projects whose `deleted` flag equals this value.
    pub deleted: Option<bool>,
    /// Sort column. `None` keeps creation order.
    pub sort_by: Option<ProjectSortField>,
    pub sort_order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ProjectListQuery {
    fn default() -> Self {
        Self {
            name: None,
            deleted: None,
            sort_by: None,
            sort_order: SortOrder::Asc,
            limit: sitedesk_core::listing::DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_leader_is_kept_and_null_clears_it() {
        let omitted: UpdateProject = serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        assert_eq!(omitted.project_leader, None);

        let cleared: UpdateProject = serde_json::from_str(r#"{"project_leader": null}"#).unwrap();
        assert_eq!(cleared.project_leader, Some(None));

        let id = DbId::new_v4();
        let set: UpdateProject =
            serde_json::from_str(&format!(r#"{{"project_leader": "{id}"}}"#)).unwrap();
        assert_eq!(set.project_leader, Some(Some(id)));
    }

    #[test]
    fn blank_names_fail_validation() {
        let input = UpdateProject {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(input.validate().is_err());
    }
}
