//! Repository for the `object_statuses` lookup table.

use sitedesk_core::types::DbId;

use crate::models::object_status::{CreateObjectStatus, ObjectStatus};
use crate::DbPool;

pub struct ObjectStatusRepo;

impl ObjectStatusRepo {
    /// Insert a new status with a generated id, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateObjectStatus,
    ) -> Result<ObjectStatus, sqlx::Error> {
        sqlx::query_as::<_, ObjectStatus>(
            "INSERT INTO object_statuses (object_status_id, name)
             VALUES (?, ?)
             RETURNING object_status_id, name",
        )
        .bind(DbId::new_v4())
        .bind(&input.name)
        .fetch_one(pool)
        .await
    }
}
