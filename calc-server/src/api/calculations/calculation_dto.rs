use calc_core::Calculation;

use serde::Serialize;

/// Calculation DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct CalculationDto {
    pub id: String,
    pub operation: String,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Calculation> for CalculationDto {
    fn from(c: Calculation) -> Self {
        Self {
            id: c.id.to_string(),
            operation: c.operation.as_str().to_string(),
            a: c.a,
            b: c.b,
            result: c.result,
            created_at: c.created_at.to_rfc3339(),
            updated_at: c.updated_at.to_rfc3339(),
        }
    }
}
