//! Repository for the `objects` table.

use sitedesk_core::types::DbId;
use sqlx::{Executor, Sqlite};

use crate::models::object::{CreateObject, Object};
use crate::DbPool;

const COLUMNS: &str = "object_id, name, address, description, status, deleted";

pub struct ObjectRepo;

impl ObjectRepo {
    /// Insert a new object with a generated id, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateObject) -> Result<Object, sqlx::Error> {
        let query = format!(
            "INSERT INTO objects (object_id, name, address, description, status)
             VALUES (?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Object>(&query)
            .bind(DbId::new_v4())
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.description)
            .bind(input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an object by id, including soft-deleted rows.
    ///
    /// Accepts any executor so it can run inside a unit of work as well as
    /// directly against the pool.
    pub async fn find_by_id<'e, E>(
        executor: E,
        object_id: DbId,
    ) -> Result<Option<Object>, sqlx::Error>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let query = format!("SELECT {COLUMNS} FROM objects WHERE object_id = ?");
        sqlx::query_as::<_, Object>(&query)
            .bind(object_id)
            .fetch_optional(executor)
            .await
    }
}
