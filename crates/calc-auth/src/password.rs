//! One-way password hashing with bcrypt.

use crate::{AuthError, AuthResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// bcrypt ignores input beyond 72 bytes; both hash and verify truncate so
/// the two sides always agree on the effective password.
const BCRYPT_MAX_BYTES: usize = 72;

fn truncated(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    &bytes[..bytes.len().min(BCRYPT_MAX_BYTES)]
}

/// Hash a plaintext password. Each call salts independently, so hashing the
/// same input twice yields different strings.
#[track_caller]
pub fn hash_password(password: &str) -> AuthResult<String> {
    bcrypt::hash(truncated(password), bcrypt::DEFAULT_COST).map_err(|e| AuthError::Hash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Verify a plaintext password against a stored bcrypt hash.
#[track_caller]
pub fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    bcrypt::verify(truncated(password), hash).map_err(|e| AuthError::Hash {
        source: e,
        location: ErrorLocation::from(Location::caller()),
    })
}
