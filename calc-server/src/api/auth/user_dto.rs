use calc_core::User;

use serde::Serialize;

/// External view of a user. Deliberately has no password-hash field:
/// the storage-internal record and the response shape are separate types.
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub last_login: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            username: u.username,
            is_active: u.is_active,
            is_verified: u.is_verified,
            last_login: u.last_login.map(|dt| dt.to_rfc3339()),
            created_at: u.created_at.to_rfc3339(),
            updated_at: u.updated_at.to_rfc3339(),
        }
    }
}
