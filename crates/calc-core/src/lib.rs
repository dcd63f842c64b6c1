pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::calculation::Calculation;
pub use models::operation::Operation;
pub use models::user::User;

#[cfg(test)]
mod tests;
