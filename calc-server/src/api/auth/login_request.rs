use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username or email - either identifier is accepted
    pub username: String,
    pub password: String,
}
