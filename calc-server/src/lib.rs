pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
        user_dto::UserDto,
    },
    calculations::{
        calculation_dto::CalculationDto,
        calculation_request::CalculationRequest,
        calculations::{
            create_calculation, delete_calculation, get_calculation, list_calculations,
            update_calculation,
        },
    },
    error::ApiError,
    error::ApiResult,
    extractors::json_body::JsonBody,
};

pub use crate::routes::build_router;
pub use crate::state::AppState;
