use sitedesk_core::types::DbId;

/// Errors raised by repository operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A foreign reference supplied by the caller points at no row.
    #[error("{entity} with id {id} does not exist")]
    MissingReference { entity: &'static str, id: DbId },

    /// Any error reported by sqlx or the database itself.
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
