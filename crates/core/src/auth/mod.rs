//! Password rules and hashing for user accounts.

mod password;

pub use password::{
    MIN_PASSWORD_LEN, PasswordError, hash_password, validate_password, verify_password,
};
