pub mod claims;
pub mod error;
pub mod password;
pub mod token_service;

pub use claims::Claims;
pub use error::{AuthError, AuthResult};
pub use password::{hash_password, verify_password};
pub use token_service::TokenService;
