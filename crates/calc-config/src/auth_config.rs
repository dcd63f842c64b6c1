use crate::{ConfigError, ConfigErrorResult, DEFAULT_JWT_SECRET, DEFAULT_TOKEN_TTL_MINUTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 shared secret for access tokens
    pub jwt_secret: String,
    /// Access token lifetime in minutes
    pub token_ttl_minutes: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::auth("auth.jwt_secret must not be empty"));
        }

        if self.token_ttl_minutes == 0 {
            return Err(ConfigError::auth(
                "auth.token_ttl_minutes must be at least 1",
            ));
        }

        Ok(())
    }
}
