//! Calculation repository: CRUD over the calculation ledger.

use crate::{DbError, DbResult};

use calc_core::{Calculation, Operation};

use std::panic::Location;
use std::str::FromStr;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct CalculationRow {
    id: String,
    operation: String,
    a: f64,
    b: f64,
    result: f64,
    created_at: i64,
    updated_at: i64,
}

impl CalculationRow {
    #[track_caller]
    fn into_calculation(self) -> DbResult<Calculation> {
        let id = Uuid::parse_str(&self.id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in calculation.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let operation = Operation::from_str(&self.operation).map_err(|e| DbError::Decode {
            message: format!("Invalid operation in calculation.operation: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let created_at = DateTime::from_timestamp(self.created_at, 0).ok_or_else(|| {
            DbError::Decode {
                message: "Invalid timestamp in calculation.created_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        let updated_at = DateTime::from_timestamp(self.updated_at, 0).ok_or_else(|| {
            DbError::Decode {
                message: "Invalid timestamp in calculation.updated_at".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Calculation {
            id,
            operation,
            a: self.a,
            b: self.b,
            result: self.result,
            created_at,
            updated_at,
        })
    }
}

pub struct CalculationRepository {
    pool: SqlitePool,
}

impl CalculationRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, calc: &Calculation) -> DbResult<()> {
        sqlx::query(
            r#"
                INSERT INTO calc_calculations (
                    id, operation, a, b, result, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(calc.id.to_string())
        .bind(calc.operation.as_str())
        .bind(calc.a)
        .bind(calc.b)
        .bind(calc.result)
        .bind(calc.created_at.timestamp())
        .bind(calc.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<Calculation>> {
        let row = sqlx::query_as::<_, CalculationRow>(
            r#"
                SELECT id, operation, a, b, result, created_at, updated_at
                FROM calc_calculations
                WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CalculationRow::into_calculation).transpose()
    }

    pub async fn find_all(&self) -> DbResult<Vec<Calculation>> {
        let rows = sqlx::query_as::<_, CalculationRow>(
            r#"
                SELECT id, operation, a, b, result, created_at, updated_at
                FROM calc_calculations
                ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(CalculationRow::into_calculation)
            .collect()
    }

    pub async fn update(&self, calc: &Calculation) -> DbResult<()> {
        sqlx::query(
            r#"
                UPDATE calc_calculations
                SET operation = ?, a = ?, b = ?, result = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(calc.operation.as_str())
        .bind(calc.a)
        .bind(calc.b)
        .bind(calc.result)
        .bind(calc.updated_at.timestamp())
        .bind(calc.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Hard delete. Returns false when no row had the id.
    pub async fn delete(&self, id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM calc_calculations WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
