#![allow(dead_code)]

//! Test infrastructure for calc-server API tests

use calc_auth::TokenService;
use calc_auth::token_service::DEFAULT_TOKEN_TTL;
use calc_core::{Calculation, Operation};
use calc_db::CalculationRepository;
use calc_server::state::AppState;

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use sqlx::SqlitePool;

pub const TEST_SECRET: &[u8] = b"test-secret";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/calc-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let tokens = Arc::new(TokenService::new(TEST_SECRET, DEFAULT_TOKEN_TTL));

    AppState { pool, tokens }
}

/// Build a JSON POST/PUT request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Registration payload with sensible defaults
pub fn register_body(username: &str, email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "first_name": "Test",
        "last_name": "User",
        "email": email,
        "username": username,
        "password": password,
    })
}

/// Insert a calculation directly through the repository
pub async fn create_test_calculation(
    pool: &SqlitePool,
    operation: Operation,
    a: f64,
    b: f64,
) -> Calculation {
    let calc = Calculation::new(operation, a, b).expect("Failed to build calculation");

    CalculationRepository::new(pool.clone())
        .create(&calc)
        .await
        .expect("Failed to insert test calculation");

    calc
}
