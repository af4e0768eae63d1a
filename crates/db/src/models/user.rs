//! User rows and the read-only leader projection.

use serde::Serialize;
use sitedesk_core::types::DbId;
use sqlx::FromRow;

/// Full user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: DbId,
    pub login: String,
    pub name: String,
    pub role: String,
    pub deleted: bool,
}

/// User data embedded in a project as its `project_leader`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    pub user_id: DbId,
    pub login: String,
    pub name: String,
    pub role: String,
    pub deleted: bool,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            login: user.login,
            name: user.name,
            role: user.role,
            deleted: user.deleted,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub login: String,
    pub name: String,
    /// Defaults to `"user"` if omitted.
    pub role: Option<String>,
}
