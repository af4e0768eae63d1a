//! Repository for the `users` table.
//!
//! Users are managed elsewhere; this service only needs to create them for
//! seeding and to resolve project leaders.

use sitedesk_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::user::{CreateUser, User};
use crate::DbPool;

const COLUMNS: &str = "user_id, login, name, role, deleted";

pub struct UserRepo;

impl UserRepo {
    /// Insert a new user with a generated id. `role` defaults to `"user"`.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (user_id, login, name, role)
             VALUES (?, ?, ?, COALESCE(?, 'user'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(DbId::new_v4())
            .bind(&input.login)
            .bind(&input.name)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Find a user by id, including soft-deleted rows.
    ///
    /// Accepts any executor so it can run inside a unit of work as well as
    /// directly against the pool.
    pub async fn find_by_id<'e, E>(
        executor: E,
        user_id: DbId,
    ) -> Result<Option<User>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(executor)
            .await
    }
}
