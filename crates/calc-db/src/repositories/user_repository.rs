//! User repository: persistence for user accounts and the uniqueness
//! invariant on email and username.

use crate::{DbError, DbResult};

use calc_core::User;

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;
use uuid::Uuid;

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    first_name: String,
    last_name: String,
    email: String,
    username: String,
    password_hash: String,
    is_active: bool,
    is_verified: bool,
    last_login: Option<i64>,
    created_at: i64,
    updated_at: i64,
}

impl UserRow {
    #[track_caller]
    fn into_user(self) -> DbResult<User> {
        let id = Uuid::parse_str(&self.id).map_err(|e| DbError::Decode {
            message: format!("Invalid UUID in user.id: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let created_at = timestamp(self.created_at, "user.created_at")?;
        let updated_at = timestamp(self.updated_at, "user.updated_at")?;
        let last_login = self
            .last_login
            .map(|ts| timestamp(ts, "user.last_login"))
            .transpose()?;

        Ok(User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            username: self.username,
            password_hash: self.password_hash,
            is_active: self.is_active,
            is_verified: self.is_verified,
            last_login,
            created_at,
            updated_at,
        })
    }
}

#[track_caller]
fn timestamp(ts: i64, column: &str) -> DbResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Decode {
        message: format!("Invalid timestamp in {}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}

const SELECT_USER: &str = r#"
    SELECT id, first_name, last_name, email, username, password_hash,
        is_active, is_verified, last_login, created_at, updated_at
    FROM calc_users
"#;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A duplicate email or username surfaces as
    /// `DbError::UniqueViolation`.
    pub async fn create(&self, user: &User) -> DbResult<()> {
        sqlx::query(
            r#"
                INSERT INTO calc_users (
                    id, first_name, last_name, email, username, password_hash,
                    is_active, is_verified, last_login, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(user.is_active)
        .bind(user.is_verified)
        .bind(user.last_login.map(|dt| dt.timestamp()))
        .bind(user.created_at.timestamp())
        .bind(user.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Look up a user by login identifier: matches stored username or
    /// stored email. Uniqueness guarantees at most one match.
    pub async fn find_by_identifier(&self, identifier: &str) -> DbResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{} WHERE username = ? OR email = ? LIMIT 1",
            SELECT_USER
        ))
        .bind(identifier)
        .bind(identifier)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Registration pre-check: any existing user holding either value.
    pub async fn find_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> DbResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "{} WHERE email = ? OR username = ? LIMIT 1",
            SELECT_USER
        ))
        .bind(email)
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(&format!("{} WHERE id = ?", SELECT_USER))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// One-field mutation on successful authentication.
    pub async fn update_last_login(&self, id: Uuid, at: DateTime<Utc>) -> DbResult<()> {
        sqlx::query(
            r#"
                UPDATE calc_users
                SET last_login = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(at.timestamp())
        .bind(at.timestamp())
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
