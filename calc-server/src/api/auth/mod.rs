pub mod auth;
pub mod login_request;
pub mod register_request;
pub mod token_response;
pub mod user_dto;
