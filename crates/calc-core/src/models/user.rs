//! User entity - an authenticated account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user. `password_hash` is always a derived bcrypt string;
/// the plaintext never appears in this struct, and response DTOs omit the
/// hash entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Globally unique, case-sensitive as stored
    pub email: String,
    /// Globally unique, case-sensitive as stored
    pub username: String,
    pub password_hash: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default flags. The caller supplies an
    /// already-hashed password.
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        username: String,
        password_hash: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name,
            last_name,
            email,
            username,
            password_hash,
            is_active: true,
            is_verified: false,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record a successful login.
    pub fn touch_login(&mut self, at: DateTime<Utc>) {
        self.last_login = Some(at);
        self.updated_at = at;
    }
}
