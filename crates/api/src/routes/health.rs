//! Liveness and readiness report for load balancers and operators.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use sitedesk_db::MigrationStatus;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `"ok"` when the database answers and its schema is current,
    /// `"degraded"` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `None` when the database could not be queried.
    pub migrations: Option<MigrationStatus>,
}

/// GET /health, no authentication.
///
/// Answers 200 when ready and 503 when the database is unreachable or
/// migrations are pending, so a load balancer can act on the status code.
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let db_healthy = sitedesk_db::health_check(&state.pool).await.is_ok();
    let migrations = if db_healthy {
        sitedesk_db::migration_status(&state.pool)
            .await
            .map_err(|e| tracing::warn!(error = %e, "Could not read migration status"))
            .ok()
    } else {
        None
    };

    let ready = db_healthy && migrations.is_some_and(|m| m.is_current());
    let code = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        code,
        Json(HealthReport {
            status: if ready { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            migrations,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
