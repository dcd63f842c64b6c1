#![allow(dead_code)]

//! Shared test database setup for repository tests

use sqlx::SqlitePool;

/// Create an in-memory SQLite pool with migrations applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePool::connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}
