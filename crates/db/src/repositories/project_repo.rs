//! Repository for the `projects` table.
//!
//! Every operation runs inside its own [`UnitOfWork`]: the transaction is
//! committed only when the operation finishes successfully, and any `?`
//! return drops it, rolling back whatever was written.

use sitedesk_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::error::DbError;
use crate::models::project::{
    CreateProject, Project, ProjectDetails, ProjectDetailsRow, ProjectListQuery, UpdateProject,
};
use crate::repositories::{ObjectRepo, UserRepo};
use crate::{begin_unit_of_work, DbPool, UnitOfWork};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "project_id, name, object, project_leader, deleted, created_at, updated_at";

/// Join of a project with its object, the object's status and its leader.
const DETAILS_SELECT: &str = "SELECT p.project_id, p.name, p.deleted, \
        o.object_id AS object_id, o.name AS object_name, o.address AS object_address, \
        o.description AS object_description, o.deleted AS object_deleted, \
        s.object_status_id AS status_id, s.name AS status_name, \
        u.user_id AS leader_user_id, u.login AS leader_login, u.name AS leader_name, \
        u.role AS leader_role, u.deleted AS leader_deleted \
     FROM projects p \
     JOIN objects o ON o.object_id = p.object \
     LEFT JOIN object_statuses s ON s.object_status_id = o.status \
     LEFT JOIN users u ON u.user_id = p.project_leader";

/// Provides the project management operations.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project with a generated id and `deleted = false`.
    ///
    /// Fails with [`DbError::MissingReference`] if `object` or
    /// `project_leader` do not point at existing rows.
    pub async fn create(pool: &DbPool, input: &CreateProject) -> Result<Project, DbError> {
        let mut tx = begin_unit_of_work(pool).await?;

        ensure_references(&mut tx, Some(input.object), input.project_leader).await?;

        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO projects
                (project_id, name, name_folded, object, project_leader, deleted,
                 created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, 0, ?, ?)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(DbId::new_v4())
            .bind(&input.name)
            .bind(fold_name(&input.name))
            .bind(input.object)
            .bind(input.project_leader)
            .bind(now)
            .bind(now)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project row by id, including soft-deleted rows.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE project_id = ?");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the earliest-created project with exactly this name.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects WHERE name = ? ORDER BY created_at, rowid LIMIT 1"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Load a project with its object and leader resolved.
    ///
    /// Soft-deleted projects are returned too; callers inspect `deleted`.
    pub async fn find_details(
        pool: &DbPool,
        id: DbId,
    ) -> Result<Option<ProjectDetails>, sqlx::Error> {
        let mut tx = begin_unit_of_work(pool).await?;

        let query = format!("{DETAILS_SELECT} WHERE p.project_id = ?");
        let row = sqlx::query_as::<_, ProjectDetailsRow>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row.map(ProjectDetails::from))
    }

    /// List one page of projects with nested data.
    ///
    /// Without `sort_by` the page follows creation order; `sort_order`
    /// applies to whichever ordering is in effect. Ties always fall back
    /// to creation order so paging is stable.
    pub async fn list_details(
        pool: &DbPool,
        params: &ProjectListQuery,
    ) -> Result<Vec<ProjectDetails>, sqlx::Error> {
        let mut tx = begin_unit_of_work(pool).await?;

        let mut builder = QueryBuilder::<Sqlite>::new(DETAILS_SELECT);
        builder.push(" WHERE 1 = 1");

        if let Some(name) = &params.name {
            builder
                .push(" AND p.name_folded LIKE ")
                .push_bind(format!("%{}%", escape_like(&fold_name(name))))
                .push(" ESCAPE '\\'");
        }
        if let Some(deleted) = params.deleted {
            builder.push(" AND p.deleted = ").push_bind(deleted);
        }

        let direction = params.sort_order.as_sql();
        match params.sort_by {
            Some(field) => builder.push(format!(
                " ORDER BY {} {direction}, p.created_at ASC, p.rowid ASC",
                field.column()
            )),
            None => builder.push(format!(
                " ORDER BY p.created_at {direction}, p.rowid {direction}"
            )),
        };

        builder
            .push(" LIMIT ")
            .push_bind(params.limit)
            .push(" OFFSET ")
            .push_bind(params.offset);

        let rows = builder
            .build_query_as::<ProjectDetailsRow>()
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rows.into_iter().map(ProjectDetails::from).collect())
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `project_leader: Some(None)` removes the leader.
    ///
    /// Returns `None` if no project with the given id exists. Changed
    /// references are checked the same way as in [`create`](Self::create).
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, DbError> {
        let mut tx = begin_unit_of_work(pool).await?;

        let exists: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE project_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        if exists == 0 {
            return Ok(None);
        }

        let leader = input.project_leader.flatten();
        ensure_references(&mut tx, input.object, leader).await?;

        let query = format!(
            "UPDATE projects SET
                name = COALESCE(?, name),
                name_folded = COALESCE(?, name_folded),
                object = COALESCE(?, object),
                project_leader = CASE WHEN ? THEN ? ELSE project_leader END,
                updated_at = ?
             WHERE project_id = ?
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(input.name.as_deref().map(fold_name))
            .bind(input.object)
            .bind(input.project_leader.is_some())
            .bind(leader)
            .bind(chrono::Utc::now())
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(project)
    }

    /// Mark a project as deleted. Returns `true` if the project exists.
    ///
    /// Soft-deleting an already-deleted project succeeds and leaves it deleted.
    pub async fn soft_delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = begin_unit_of_work(pool).await?;

        let result =
            sqlx::query("UPDATE projects SET deleted = 1, updated_at = ? WHERE project_id = ?")
                .bind(chrono::Utc::now())
                .bind(id)
                .execute(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = begin_unit_of_work(pool).await?;

        let result = sqlx::query("DELETE FROM projects WHERE project_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Check that the referenced object and leader (when given) exist.
async fn ensure_references(
    tx: &mut UnitOfWork,
    object: Option<DbId>,
    project_leader: Option<DbId>,
) -> Result<(), DbError> {
    let conn: &mut SqliteConnection = tx;

    if let Some(object_id) = object {
        if ObjectRepo::find_by_id(&mut *conn, object_id).await?.is_none() {
            return Err(DbError::MissingReference {
                entity: "Object",
                id: object_id,
            });
        }
    }
    if let Some(user_id) = project_leader {
        if UserRepo::find_by_id(&mut *conn, user_id).await?.is_none() {
            return Err(DbError::MissingReference {
                entity: "User",
                id: user_id,
            });
        }
    }
    Ok(())
}

/// Unicode lowercase form stored in `name_folded` and used for name search.
fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// Escape `LIKE` wildcards so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
