use serde::Deserialize;

/// Body for both create and update. `result` is never accepted from the
/// caller; it is recomputed on every write.
#[derive(Debug, Deserialize)]
pub struct CalculationRequest {
    /// One of "add", "subtract", "multiply", "divide"
    pub operation: String,
    pub a: f64,
    pub b: f64,
}
