//! Expense records and their validation.
//!
//! An [`ExpenseRecord`] is the part of an expense the balance calculator
//! reads. [`Expense`] wraps it with the bookkeeping fields the rest of the
//! application stores and displays.

pub mod error;
pub mod types;
pub mod validation;

pub use error::ExpenseError;
pub use types::{CustomAmounts, Expense, ExpenseRecord, SplitMethod};
pub use validation::{
    MAX_EXPENSE_AMOUNT, validate_membership, validate_new_expense, validate_record,
};
