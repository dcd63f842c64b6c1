//! Issues and verifies HS256 access tokens.

use crate::{AuthError, AuthResult, Claims};

use std::panic::Location;
use std::time::Duration;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

/// Default access token lifetime
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Stateless token service: expiry is the only invalidation mechanism.
///
/// Constructed once from configuration (secret + lifetime) and shared
/// through application state; there is no process-global secret.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a service signing with an HS256 shared secret.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // No leeway: a token past its expiry instant is invalid
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Issue a signed token asserting `subject`, expiring after the
    /// configured lifetime.
    #[track_caller]
    pub fn issue(&self, subject: Uuid) -> AuthResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            exp: now + self.ttl.as_secs() as i64,
            iat: now,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Decode and check a token, returning its claims.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Extract the subject from a token, failing closed.
    ///
    /// Total over arbitrary input strings: bad signature, malformed
    /// structure, missing or non-UUID `sub`, and expired tokens all yield
    /// `None` rather than an error.
    pub fn verify(&self, token: &str) -> Option<Uuid> {
        match self.validate(token) {
            Ok(claims) => Uuid::parse_str(&claims.sub).ok(),
            Err(e) => {
                log::debug!("Token rejected: {}", e);
                None
            }
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
