//! Object status lookup rows.

use serde::Serialize;
use sitedesk_core::types::DbId;
use sqlx::FromRow;

/// A row from the `object_statuses` table. Also used as the nested status
/// projection inside [`ObjectDetails`](crate::models::object::ObjectDetails).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct ObjectStatus {
    pub object_status_id: DbId,
    pub name: String,
}

/// DTO for creating a new object status.
#[derive(Debug, Clone)]
pub struct CreateObjectStatus {
    pub name: String,
}
