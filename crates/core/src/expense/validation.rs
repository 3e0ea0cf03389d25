//! Business rule validation for expense records.

use std::collections::HashSet;

use rust_decimal::Decimal;
use splitbook_shared::types::MemberId;

use super::error::ExpenseError;
use super::types::{ExpenseRecord, SplitMethod};
use crate::tolerance::amounts_match;

/// Largest amount a single expense or custom share may carry.
///
/// Keeps every balance sum far inside `Decimal`'s range.
pub const MAX_EXPENSE_AMOUNT: Decimal = Decimal::from_parts(1_215_752_192, 23, 0, false, 2);

/// Checks the rules every record must satisfy before it is accounted for.
///
/// - `amount` is positive and at most [`MAX_EXPENSE_AMOUNT`]
/// - `split_among` is not empty (an equal split divides by its length)
/// - custom shares are non-negative, at most [`MAX_EXPENSE_AMOUNT`] and sum to `amount` within tolerance
///
/// # Errors
///
/// Returns the first rule the record breaks.
pub fn validate_record(record: &ExpenseRecord) -> Result<(), ExpenseError> {
    if record.amount <= Decimal::ZERO {
        return Err(ExpenseError::NonPositiveAmount(record.amount));
    }
    if record.amount > MAX_EXPENSE_AMOUNT {
        return Err(ExpenseError::AmountTooLarge(record.amount));
    }

    if record.split_among.is_empty() {
        return Err(ExpenseError::EmptySplit);
    }

    if let Some(shares) = record.custom_shares() {
        if let Some((member, share)) = shares.iter().find(|(_, share)| **share < Decimal::ZERO) {
            return Err(ExpenseError::NegativeShare {
                member: member.clone(),
                share: *share,
            });
        }
        if let Some(share) = shares.values().find(|share| **share > MAX_EXPENSE_AMOUNT) {
            return Err(ExpenseError::AmountTooLarge(*share));
        }

        let actual: Decimal = shares.values().copied().sum();
        if !amounts_match(actual, record.amount) {
            return Err(ExpenseError::CustomSplitMismatch {
                expected: record.amount,
                actual,
            });
        }
    }

    Ok(())
}

/// Checks that every identifier the record references is in `members`.
///
/// # Errors
///
/// Returns `ExpenseError::UnknownMember` for the first stranger found.
pub fn validate_membership(
    record: &ExpenseRecord,
    members: &HashSet<&str>,
) -> Result<(), ExpenseError> {
    match record
        .referenced_members()
        .find(|member| !members.contains(member.as_str()))
    {
        Some(stranger) => Err(ExpenseError::UnknownMember(stranger.clone())),
        None => Ok(()),
    }
}

/// Full check applied when an expense is recorded for a group.
///
/// Stricter than [`validate_record`]: a `custom` split must carry shares.
///
/// # Errors
///
/// Returns the first rule the record breaks.
pub fn validate_new_expense(record: &ExpenseRecord, members: &[MemberId]) -> Result<(), ExpenseError> {
    if record.split_method == SplitMethod::Custom && record.custom_amounts.is_none() {
        return Err(ExpenseError::MissingCustomAmounts);
    }

    validate_record(record)?;

    let lookup: HashSet<&str> = members.iter().map(MemberId::as_str).collect();
    validate_membership(record, &lookup)
}
