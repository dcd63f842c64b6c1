pub mod error;
pub mod repositories;

pub use error::{DbError, DbResult};
pub use repositories::calculation_repository::CalculationRepository;
pub use repositories::user_repository::UserRepository;
