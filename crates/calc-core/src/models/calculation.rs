//! Calculation entity - one persisted arithmetic evaluation.

use crate::{CoreResult, Operation};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record of one binary arithmetic evaluation.
///
/// `result` is always the output of applying `operation` to `(a, b)` at the
/// time of last write; it is recomputed on create and update, never taken
/// from the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub id: Uuid,
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Calculation {
    /// Evaluate the operation and create a new record.
    #[track_caller]
    pub fn new(operation: Operation, a: f64, b: f64) -> CoreResult<Self> {
        let result = operation.apply(a, b)?;
        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            operation,
            a,
            b,
            result,
            created_at: now,
            updated_at: now,
        })
    }

    /// Full replace of operation and operands; the result is recomputed.
    /// The record is untouched when evaluation fails.
    #[track_caller]
    pub fn replace(&mut self, operation: Operation, a: f64, b: f64) -> CoreResult<()> {
        let result = operation.apply(a, b)?;
        self.operation = operation;
        self.a = a;
        self.b = b;
        self.result = result;
        self.updated_at = Utc::now();
        Ok(())
    }
}
