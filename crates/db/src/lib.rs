//! Persistence layer: connection pool, migrations, the unit-of-work handle,
//! row models and repositories.

use std::str::FromStr;

use serde::Serialize;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

pub mod error;
pub mod models;
pub mod repositories;

pub use error::DbError;

pub type DbPool = sqlx::SqlitePool;

/// A transactional scope bound to one repository operation.
///
/// Obtained from [`begin_unit_of_work`]. Changes become visible only after
/// `commit()`; dropping the handle without committing rolls everything back,
/// so every early return through `?` leaves no partial state behind.
pub type UnitOfWork = Transaction<'static, Sqlite>;

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist and foreign key
/// enforcement is switched on for every connection.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Migrations embedded from `crates/db/migrations`.
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all pending migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// How far the connected database is behind the embedded migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MigrationStatus {
    /// Migrations recorded as successfully applied.
    pub applied: i64,
    /// Embedded migrations not yet applied.
    pub pending: i64,
}

impl MigrationStatus {
    pub fn is_current(&self) -> bool {
        self.pending == 0
    }
}

/// Compare the `_sqlx_migrations` ledger against the embedded migrations.
///
/// A database that was never migrated has no ledger table and reports
/// every migration as pending.
pub async fn migration_status(pool: &DbPool) -> Result<MigrationStatus, sqlx::Error> {
    let known = MIGRATOR.iter().count() as i64;

    let has_ledger: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;
    let applied: i64 = if has_ledger == 0 {
        0
    } else {
        sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations WHERE success = 1")
            .fetch_one(pool)
            .await?
    };

    Ok(MigrationStatus {
        applied,
        pending: (known - applied).max(0),
    })
}

/// Open a new unit of work on the pool.
pub async fn begin_unit_of_work(pool: &DbPool) -> Result<UnitOfWork, sqlx::Error> {
    let tx = pool.begin().await?;
    tracing::trace!("Unit of work opened");
    Ok(tx)
}
