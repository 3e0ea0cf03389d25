//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Caller is not allowed to touch the group.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Expense data cannot be turned into balances.
    #[error("Invalid expense: {0}")]
    InvalidExpense(String),

    /// Conflict (e.g., duplicate email or member).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::InvalidExpense(_) => 422,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Unauthorized(_) => "unauthorized",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Validation(_) => "validation_error",
            Self::InvalidExpense(_) => "invalid_expense",
            Self::Conflict(_) => "conflict",
            Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show to API clients.
    ///
    /// Internal details are logged, never returned.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal(_) => "An internal error occurred".to_string(),
            Self::Unauthorized(msg)
            | Self::Forbidden(msg)
            | Self::NotFound(msg)
            | Self::Validation(msg)
            | Self::InvalidExpense(msg)
            | Self::Conflict(msg) => msg.clone(),
        }
    }
}
