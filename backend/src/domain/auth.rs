//! Password hashing and verification.
//!
//! Hashes are bcrypt strings, so the algorithm, cost, and salt are embedded
//! in the stored value itself.

use bcrypt::DEFAULT_COST;

use crate::domain::Error;

/// Hash a plaintext password into a self-describing bcrypt string.
pub fn hash_password(plain: &str) -> Result<String, Error> {
    bcrypt::hash(plain, DEFAULT_COST)
        .map_err(|err| Error::internal(format!("password hashing failed: {err}")))
}

/// Verify a plaintext password against a stored hash.
///
/// Malformed hashes verify as `false`; verification never surfaces an error
/// to callers.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}
