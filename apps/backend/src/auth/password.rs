//! Bcrypt password hashing and verification.

use crate::AppError;

/// Hash a plaintext password with bcrypt at the default cost.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
}

/// Check a plaintext password against a stored bcrypt hash.
///
/// Returns Ok(false) on mismatch; Err only when the stored hash itself
/// cannot be parsed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| AppError::internal(format!("Failed to verify password: {e}")))
}
