use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type ServerErrorResult<T> = std::result::Result<T, ServerError>;
