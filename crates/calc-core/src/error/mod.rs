use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid operation: {value} {location}")]
    InvalidOperation {
        value: String,
        location: ErrorLocation,
    },

    #[error("Cannot divide by zero {location}")]
    DivisionByZero { location: ErrorLocation },
}

pub type CoreResult<T> = StdResult<T, CoreError>;
