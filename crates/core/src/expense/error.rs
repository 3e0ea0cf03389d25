//! Expense error types.

use rust_decimal::Decimal;
use splitbook_shared::types::MemberId;
use thiserror::Error;

/// Errors raised when an expense cannot be accounted for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpenseError {
    // ========== Record Errors ==========
    /// Nobody to split the expense among.
    #[error("Expense must be split among at least one member")]
    EmptySplit,

    /// Amount is zero or negative.
    #[error("Expense amount must be positive, got {0}")]
    NonPositiveAmount(Decimal),

    /// Amount or custom share above [`MAX_EXPENSE_AMOUNT`](super::MAX_EXPENSE_AMOUNT).
    #[error("Expense amount {0} exceeds the limit of {limit}", limit = super::MAX_EXPENSE_AMOUNT)]
    AmountTooLarge(Decimal),

    /// Custom shares do not add up to the expense amount.
    #[error("Custom split does not add up: expected {expected}, got {actual}")]
    CustomSplitMismatch {
        /// The expense amount.
        expected: Decimal,
        /// Sum of the custom shares.
        actual: Decimal,
    },

    /// A custom share is below zero.
    #[error("Custom share for {member} cannot be negative: {share}")]
    NegativeShare {
        /// Member owning the share.
        member: MemberId,
        /// The offending share.
        share: Decimal,
    },

    /// Custom split method without any shares.
    #[error("Custom split requires custom amounts")]
    MissingCustomAmounts,

    // ========== Membership Errors ==========
    /// Identifier is not a member of the group.
    #[error("Member {0} does not belong to the group")]
    UnknownMember(MemberId),
}

impl ExpenseError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptySplit => "EMPTY_SPLIT",
            Self::NonPositiveAmount(_) => "NON_POSITIVE_AMOUNT",
            Self::AmountTooLarge(_) => "AMOUNT_TOO_LARGE",
            Self::CustomSplitMismatch { .. } => "CUSTOM_SPLIT_MISMATCH",
            Self::NegativeShare { .. } => "NEGATIVE_SHARE",
            Self::MissingCustomAmounts => "MISSING_CUSTOM_AMOUNTS",
            Self::UnknownMember(_) => "UNKNOWN_MEMBER",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - malformed record
            Self::EmptySplit
            | Self::NonPositiveAmount(_)
            | Self::AmountTooLarge(_)
            | Self::CustomSplitMismatch { .. }
            | Self::NegativeShare { .. }
            | Self::MissingCustomAmounts => 400,

            // 422 - record is well-formed but does not fit the group
            Self::UnknownMember(_) => 422,
        }
    }
}
