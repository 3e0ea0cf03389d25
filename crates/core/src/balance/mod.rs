//! Member balance calculation.
//!
//! This module turns a group's expense records into signed net balances:
//! - Insertion-ordered balance map
//! - Balance calculator with a member policy for unknown identifiers

pub mod calculator;
pub mod map;

#[cfg(test)]
mod calculator_props;

pub use calculator::{BalanceCalculator, MemberPolicy, compute_balances};
pub use map::BalanceMap;
