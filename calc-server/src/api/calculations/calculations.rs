//! Calculation REST API handlers
//!
//! Open CRUD over the calculation ledger; records are not tied to users.

use crate::{ApiError, ApiResult, CalculationDto, CalculationRequest, JsonBody};
use crate::state::AppState;

use calc_core::{Calculation, Operation};
use calc_db::CalculationRepository;

use std::panic::Location;
use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

/// GET /calculations/
pub async fn list_calculations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CalculationDto>>> {
    let repo = CalculationRepository::new(state.pool.clone());
    let calculations = repo.find_all().await?;

    Ok(Json(
        calculations.into_iter().map(CalculationDto::from).collect(),
    ))
}

/// GET /calculations/{id}
pub async fn get_calculation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CalculationDto>> {
    let calc_id = Uuid::parse_str(&id)?;

    let repo = CalculationRepository::new(state.pool.clone());
    let calc = repo
        .find_by_id(calc_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Calculation {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(calc.into()))
}

/// POST /calculations/
///
/// The operation name is checked before any storage access; a rejected
/// request persists nothing.
pub async fn create_calculation(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CalculationRequest>,
) -> ApiResult<Json<CalculationDto>> {
    let operation = Operation::from_str(&req.operation)?;
    let calc = Calculation::new(operation, req.a, req.b)?;

    let repo = CalculationRepository::new(state.pool.clone());
    repo.create(&calc).await?;

    log::info!("Created calculation {} ({})", calc.id, calc.operation.as_str());

    Ok(Json(calc.into()))
}

/// PUT /calculations/{id}
///
/// Full replace: operation and both operands; the result is recomputed.
/// An unknown id is reported before the body is validated.
pub async fn update_calculation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<CalculationRequest>,
) -> ApiResult<Json<CalculationDto>> {
    let calc_id = Uuid::parse_str(&id)?;

    let repo = CalculationRepository::new(state.pool.clone());
    let mut calc = repo
        .find_by_id(calc_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("Calculation {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let operation = Operation::from_str(&req.operation)?;
    calc.replace(operation, req.a, req.b)?;

    repo.update(&calc).await?;

    log::info!("Updated calculation {}", calc.id);

    Ok(Json(calc.into()))
}

/// DELETE /calculations/{id}
pub async fn delete_calculation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let calc_id = Uuid::parse_str(&id)?;

    let repo = CalculationRepository::new(state.pool.clone());
    if !repo.delete(calc_id).await? {
        return Err(ApiError::NotFound {
            message: format!("Calculation {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    log::info!("Deleted calculation {}", calc_id);

    Ok(StatusCode::NO_CONTENT)
}
