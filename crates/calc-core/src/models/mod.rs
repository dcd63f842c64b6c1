pub mod calculation;
pub mod operation;
pub mod user;
