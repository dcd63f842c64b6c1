pub mod auth;
pub mod calculations;
pub mod error;
pub mod extractors;
