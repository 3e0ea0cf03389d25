//! Error responses.
//!
//! Every failure leaves a handler as `{"error": <code>, "message": <text>}`
//! with the matching status.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use splitbook_core::ExpenseError;
use splitbook_core::auth::PasswordError;
use splitbook_db::RepositoryError;
use splitbook_shared::{AppError, JwtError};
use tracing::error;

/// An error on its way to the client.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl ApiError {
    /// Creates an error with an explicit status and code.
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.code,
                "message": self.message
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        if let AppError::Internal(detail) = &e {
            error!(error = %detail, "Internal error");
        }
        let status =
            StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, e.error_code(), e.public_message())
    }
}

impl From<ExpenseError> for ApiError {
    fn from(e: ExpenseError) -> Self {
        let status =
            StatusCode::from_u16(e.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST);
        Self::new(status, e.error_code(), e.to_string())
    }
}

impl From<RepositoryError> for ApiError {
    fn from(e: RepositoryError) -> Self {
        let app = match e {
            RepositoryError::Duplicate(what) => AppError::Conflict(format!("{what} already exists")),
            RepositoryError::NotFound(what) => AppError::NotFound(format!("{what} not found")),
        };
        app.into()
    }
}

impl From<JwtError> for ApiError {
    fn from(e: JwtError) -> Self {
        match e {
            JwtError::Expired => {
                Self::new(StatusCode::UNAUTHORIZED, "token_expired", "Token has expired")
            }
            JwtError::WrongKind { .. } | JwtError::DecodingError(_) => Self::new(
                StatusCode::UNAUTHORIZED,
                "invalid_token",
                "Invalid or malformed token",
            ),
            JwtError::EncodingError(detail) => AppError::Internal(detail).into(),
        }
    }
}

impl From<PasswordError> for ApiError {
    fn from(e: PasswordError) -> Self {
        if e.is_rejection() {
            AppError::Validation(e.to_string()).into()
        } else {
            AppError::Internal(e.to_string()).into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use splitbook_shared::types::MemberId;

    #[rstest]
    #[case(ExpenseError::EmptySplit, StatusCode::BAD_REQUEST, "EMPTY_SPLIT")]
    #[case(ExpenseError::NonPositiveAmount(dec!(0)), StatusCode::BAD_REQUEST, "NON_POSITIVE_AMOUNT")]
    #[case(ExpenseError::AmountTooLarge(rust_decimal::Decimal::MAX), StatusCode::BAD_REQUEST, "AMOUNT_TOO_LARGE")]
    #[case(ExpenseError::UnknownMember(MemberId::from("zed")), StatusCode::UNPROCESSABLE_ENTITY, "UNKNOWN_MEMBER")]
    fn test_expense_errors(
        #[case] err: ExpenseError,
        #[case] status: StatusCode,
        #[case] code: &str,
    ) {
        let api: ApiError = err.into();
        assert_eq!(api.status(), status);
        assert_eq!(api.code(), code);
    }

    #[test]
    fn test_repository_errors() {
        let api: ApiError = RepositoryError::Duplicate("member ben".into()).into();
        assert_eq!(api.status(), StatusCode::CONFLICT);

        let api: ApiError = RepositoryError::NotFound("group x".into()).into();
        assert_eq!(api.status(), StatusCode::NOT_FOUND);
        assert_eq!(api.code(), "not_found");
    }

    #[test]
    fn test_internal_details_hidden() {
        let api: ApiError = AppError::Internal("argon2 exploded".into()).into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.message, "An internal error occurred");
    }

    #[test]
    fn test_password_errors() {
        let api: ApiError = PasswordError::TooShort { min: 8 }.into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.code(), "validation_error");
        assert_eq!(api.message, "Password must be at least 8 characters");

        let api: ApiError = PasswordError::InvalidHash.into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_jwt_errors() {
        let api: ApiError = JwtError::Expired.into();
        assert_eq!(api.code(), "token_expired");
        let api: ApiError = JwtError::DecodingError("bad".into()).into();
        assert_eq!(api.code(), "invalid_token");
    }
}
