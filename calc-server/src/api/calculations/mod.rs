pub mod calculation_dto;
pub mod calculation_request;
pub mod calculations;
