//! Account passwords: the length rule and Argon2id hashing.

use argon2::{
    Argon2, PasswordHash,
    password_hash::{PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Shortest password accepted for a new account, in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Why a password could not be accepted, hashed or checked.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// Fewer than [`MIN_PASSWORD_LEN`] characters.
    #[error("Password must be at least {min} characters")]
    TooShort {
        /// The required length.
        min: usize,
    },

    /// Argon2 refused to hash.
    #[error("failed to hash password: {0}")]
    HashError(String),

    /// Argon2 failed for a reason other than a mismatch.
    #[error("failed to verify password: {0}")]
    VerifyError(String),

    /// Stored value is not a PHC string.
    #[error("invalid password hash format")]
    InvalidHash,
}

impl PasswordError {
    /// True when the caller supplied a bad password rather than the
    /// hasher failing.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::TooShort { .. })
    }
}

/// Checks a new password against the account rules.
///
/// Length is counted in characters, so multi-byte input is not penalized.
///
/// # Errors
///
/// Returns `PasswordError::TooShort` below [`MIN_PASSWORD_LEN`].
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordError::TooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

/// Argon2id v19 with the crate's default cost parameters.
fn hasher() -> Argon2<'static> {
    Argon2::default()
}

/// Hashes a password with a fresh random salt, returning a PHC string.
///
/// # Errors
///
/// Returns `PasswordError::HashError` if hashing fails.
///
/// # Example
///
/// ```
/// use splitbook_core::auth::hash_password;
///
/// let hash = hash_password("correct horse battery").unwrap();
/// assert!(hash.starts_with("$argon2id$"));
/// ```
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    hasher()
        .hash_password(password.as_bytes(), &salt)
        .map(|phc| phc.to_string())
        .map_err(|e| PasswordError::HashError(e.to_string()))
}

/// Checks a login attempt against a stored PHC hash.
///
/// A mismatch is `Ok(false)`, not an error.
///
/// # Errors
///
/// Returns `PasswordError::InvalidHash` if the hash format is invalid.
/// Returns `PasswordError::VerifyError` if verification fails unexpectedly.
///
/// # Example
///
/// ```
/// use splitbook_core::auth::{hash_password, verify_password};
///
/// let hash = hash_password("s3cret-member").unwrap();
/// assert!(verify_password("s3cret-member", &hash).unwrap());
/// assert!(!verify_password("someone-else", &hash).unwrap());
/// ```
pub fn verify_password(attempt: &str, stored: &str) -> Result<bool, PasswordError> {
    let stored = PasswordHash::new(stored).map_err(|_| PasswordError::InvalidHash)?;

    match hasher().verify_password(attempt.as_bytes(), &stored) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(PasswordError::VerifyError(e.to_string())),
    }
}
