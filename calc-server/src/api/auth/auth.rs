//! Authentication REST API handlers
//!
//! Registration and login; both return a token + user bundle.

use crate::{ApiError, ApiResult, JsonBody, LoginRequest, RegisterRequest, TokenResponse};
use crate::state::AppState;

use calc_core::User;
use calc_db::{DbError, UserRepository};

use std::panic::Location;

use axum::{Json, extract::State};
use chrono::Utc;
use error_location::ErrorLocation;

/// POST /auth/register
///
/// Check order is load-bearing: password length, then uniqueness, then the
/// remaining field validation, then persistence. Multiply-invalid input
/// surfaces the earliest failing check.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<Json<TokenResponse>> {
    // 1. Password length
    if req.password.chars().count() < 6 {
        return Err(ApiError::Validation {
            message: "Password must be at least 6 characters long".to_string(),
            field: Some("password".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());

    // 2. Uniqueness pre-check on either field
    if repo
        .find_by_email_or_username(&req.email, &req.username)
        .await?
        .is_some()
    {
        return Err(ApiError::Conflict {
            message: "Username or email already exists".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    // 3. Structural validation of the remaining fields
    validate_identity(&req)?;

    // 4. Hash and persist
    let password_hash = calc_auth::hash_password(&req.password)?;
    let user = User::new(
        req.first_name,
        req.last_name,
        req.email,
        req.username,
        password_hash,
    );

    // A registration racing past the pre-check loses to the UNIQUE
    // constraint and still surfaces as a conflict.
    match repo.create(&user).await {
        Err(DbError::UniqueViolation { .. }) => {
            return Err(ApiError::Conflict {
                message: "Username or email already exists".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        other => other?,
    }

    let token = state.tokens.issue(user.id)?;

    log::info!("Registered user {} ({})", user.username, user.id);

    Ok(Json(TokenResponse::bearer(token, user.into())))
}

/// POST /auth/login
///
/// Unknown identifier, inactive account, and wrong password all produce
/// the same 401 - callers cannot tell them apart from the response.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = match repo.find_by_identifier(&req.username).await? {
        Some(user) if user.is_active => user,
        _ => {
            return Err(ApiError::Unauthorized {
                location: ErrorLocation::from(Location::caller()),
            });
        }
    };

    if !calc_auth::verify_password(&req.password, &user.password_hash)? {
        return Err(ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let now = Utc::now();
    repo.update_last_login(user.id, now).await?;

    let mut user = user;
    user.touch_login(now);

    let token = state.tokens.issue(user.id)?;

    log::info!("User {} logged in", user.id);

    Ok(Json(TokenResponse::bearer(token, user.into())))
}

fn validate_identity(req: &RegisterRequest) -> ApiResult<()> {
    let field_error = |message: &str, field: &str| ApiError::Validation {
        message: message.to_string(),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    };

    if req.first_name.trim().is_empty() {
        return Err(field_error("First name must not be empty", "first_name"));
    }
    if req.last_name.trim().is_empty() {
        return Err(field_error("Last name must not be empty", "last_name"));
    }
    if !req.email.contains('@') {
        return Err(field_error("Invalid email address", "email"));
    }
    if req.username.trim().is_empty() {
        return Err(field_error("Username must not be empty", "username"));
    }

    Ok(())
}
