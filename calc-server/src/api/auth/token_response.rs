use crate::UserDto;

use serde::Serialize;

/// Token + user bundle returned by register and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserDto,
}

impl TokenResponse {
    pub fn bearer(access_token: String, user: UserDto) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
            user,
        }
    }
}
