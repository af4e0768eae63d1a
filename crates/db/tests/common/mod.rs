//! Shared fixtures for repository integration tests.

#![allow(dead_code)]

use sitedesk_db::models::object::{CreateObject, Object};
use sitedesk_db::models::object_status::{CreateObjectStatus, ObjectStatus};
use sitedesk_db::models::user::{CreateUser, User};
use sitedesk_db::repositories::{ObjectRepo, ObjectStatusRepo, UserRepo};
use sitedesk_db::DbPool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Open a private in-memory database with all migrations applied.
///
/// The pool holds exactly one connection that never expires, so the
/// in-memory database lives as long as the pool.
pub async fn test_pool() -> DbPool {
    let options: SqliteConnectOptions = "sqlite::memory:"
        .parse()
        .expect("in-memory URL should parse");
    let options = options.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .expect("in-memory database should open");
    sitedesk_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

pub async fn seed_object_status(pool: &DbPool) -> ObjectStatus {
    ObjectStatusRepo::create(
        pool,
        &CreateObjectStatus {
            name: "Active".to_string(),
        },
    )
    .await
    .expect("status creation should succeed")
}

pub async fn seed_user(pool: &DbPool, login: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            login: login.to_string(),
            name: "Test User".to_string(),
            role: None,
        },
    )
    .await
    .expect("user creation should succeed")
}

pub async fn seed_object(pool: &DbPool, status: Option<&ObjectStatus>) -> Object {
    ObjectRepo::create(
        pool,
        &CreateObject {
            name: "Test Object".to_string(),
            address: Some("123 Test St".to_string()),
            description: Some("Test description".to_string()),
            status: status.map(|s| s.object_status_id),
        },
    )
    .await
    .expect("object creation should succeed")
}
