//! Database bootstrap: pool health and migration bookkeeping.

mod common;

use sqlx::sqlite::SqlitePoolOptions;

#[tokio::test]
async fn migrated_database_reports_no_pending_migrations() {
    let pool = common::test_pool().await;

    sitedesk_db::health_check(&pool).await.unwrap();
    let status = sitedesk_db::migration_status(&pool).await.unwrap();

    assert!(status.is_current());
    assert!(status.applied >= 5);
}

#[tokio::test]
async fn fresh_database_reports_every_migration_pending() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    let status = sitedesk_db::migration_status(&pool).await.unwrap();
    assert_eq!(status.applied, 0);
    assert!(!status.is_current());

    sitedesk_db::run_migrations(&pool).await.unwrap();
    let status = sitedesk_db::migration_status(&pool).await.unwrap();
    assert!(status.is_current());
}
