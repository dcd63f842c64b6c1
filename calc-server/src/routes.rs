use crate::api::auth::auth::{login, register};
use crate::api::calculations::calculations::{
    create_calculation, delete_calculation, get_calculation, list_calculations,
    update_calculation,
};
use crate::health;
use crate::state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication endpoints
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Calculation endpoints (the original mounts the collection at the
        // trailing-slash prefix, so both spellings are served)
        .route(
            "/calculations",
            get(list_calculations).post(create_calculation),
        )
        .route(
            "/calculations/",
            get(list_calculations).post(create_calculation),
        )
        .route(
            "/calculations/{id}",
            get(get_calculation)
                .put(update_calculation)
                .delete(delete_calculation),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
