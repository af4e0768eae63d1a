//! Project listing rules shared by the repository and HTTP layers.

use crate::error::CoreError;

/// Columns a project listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSortField {
    ProjectId,
    Name,
    Object,
    ProjectLeader,
    Deleted,
}

impl ProjectSortField {
    /// All accepted `sort_by` values, in documentation order.
    pub const ALL: &'static [&'static str] =
        &["project_id", "name", "object", "project_leader", "deleted"];

    /// Parse a `sort_by` query value.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "project_id" => Ok(Self::ProjectId),
            "name" => Ok(Self::Name),
            "object" => Ok(Self::Object),
            "project_leader" => Ok(Self::ProjectLeader),
            "deleted" => Ok(Self::Deleted),
            other => Err(CoreError::Validation(format!(
                "Invalid sort_by '{other}'. Valid fields: {}",
                Self::ALL.join(", ")
            ))),
        }
    }

    /// Fully qualified column for the `projects p` alias.
    pub fn column(self) -> &'static str {
        match self {
            Self::ProjectId => "p.project_id",
            Self::Name => "p.name",
            Self::Object => "p.object",
            Self::ProjectLeader => "p.project_leader",
            Self::Deleted => "p.deleted",
        }
    }
}
