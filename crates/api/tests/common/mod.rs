//! Shared helpers for HTTP-level integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sitedesk_api::auth::jwt::{generate_access_token, JwtConfig};
use sitedesk_api::config::ServerConfig;
use sitedesk_api::router::build_app_router;
use sitedesk_api::state::AppState;
use sitedesk_db::models::object::{CreateObject, Object};
use sitedesk_db::models::object_status::{CreateObjectStatus, ObjectStatus};
use sitedesk_db::models::user::{CreateUser, User};
use sitedesk_db::repositories::{ObjectRepo, ObjectStatusRepo, UserRepo};
use sitedesk_db::DbPool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

const TEST_JWT_SECRET: &str = "integration-test-secret-that-is-long-enough";

/// Open a private in-memory database with all migrations applied.
pub async fn test_pool() -> DbPool {
    let pool = unmigrated_pool().await;
    sitedesk_db::run_migrations(&pool)
        .await
        .expect("migrations should apply");
    pool
}

/// Open a private in-memory database with an empty schema.
///
/// The pool holds exactly one connection that never expires, so the
/// in-memory database lives as long as the pool.
pub async fn unmigrated_pool() -> DbPool {
    let options: SqliteConnectOptions = "sqlite::memory:"
        .parse()
        .expect("in-memory URL should parse");
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options.foreign_keys(true))
        .await
        .expect("in-memory database should open")
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router on top of the given pool, with the
/// same middleware stack production uses.
pub fn build_test_app(pool: DbPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A valid access token signed with the test secret.
pub fn test_token() -> String {
    generate_access_token(Uuid::new_v4(), "admin", &test_config().jwt)
        .expect("token generation should succeed")
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("body should serialize"))
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).expect("request should build"))
        .await
        .expect("router should respond")
}

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

/// Send a POST request with a JSON body and no token.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

/// Send a PATCH request with a JSON body and a bearer token.
pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

/// Send a body-less PATCH request with a bearer token.
pub async fn patch_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), None).await
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
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
