pub mod calculation_repository;
pub mod user_repository;
