//! Core business logic for Splitbook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Expense validation, balance calculation, settlement planning and
//! categorization live here.
//!
//! # Modules
//!
//! - `expense` - Expense records and validation
//! - `balance` - Net balance per member
//! - `settlement` - Greedy transfer planning
//! - `category` - Keyword categorizer
//! - `summary` - Group spending overview
//! - `auth` - Password hashing

pub mod auth;
pub mod balance;
pub mod category;
pub mod expense;
pub mod settlement;
pub mod summary;
pub mod tolerance;

pub use balance::{BalanceCalculator, BalanceMap, MemberPolicy, compute_balances};
pub use category::{Categorizer, Category, CategoryRule, CategoryRules};
pub use expense::{Expense, ExpenseError, ExpenseRecord, SplitMethod};
pub use settlement::{Settlement, apply_settlements, compute_settlements};
pub use summary::GroupSummary;
pub use tolerance::BALANCE_EPSILON;
