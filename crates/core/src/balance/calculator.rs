//! Net balance computation over a group's expenses.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitbook_shared::types::MemberId;

use super::map::BalanceMap;
use crate::expense::{ExpenseError, ExpenseRecord, validate_membership, validate_record};

/// What to do with identifiers that are not in the member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberPolicy {
    /// Unknown payers and participants get their own balance entry,
    /// appended after the seeded members.
    #[default]
    Permissive,
    /// Unknown identifiers fail the computation with `UnknownMember`.
    Strict,
}

/// Computes signed net balances from expense records.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceCalculator {
    policy: MemberPolicy,
}

impl BalanceCalculator {
    /// Creates a calculator with the given member policy.
    #[must_use]
    pub const fn new(policy: MemberPolicy) -> Self {
        Self { policy }
    }

    /// Calculator that tolerates unknown identifiers.
    #[must_use]
    pub const fn permissive() -> Self {
        Self::new(MemberPolicy::Permissive)
    }

    /// Calculator that rejects unknown identifiers.
    #[must_use]
    pub const fn strict() -> Self {
        Self::new(MemberPolicy::Strict)
    }

    /// Returns the member policy.
    #[must_use]
    pub const fn policy(&self) -> MemberPolicy {
        self.policy
    }

    /// Computes every member's net balance.
    ///
    /// Each member starts at zero. For each record, in order, the payer is
    /// credited the full amount and the participants are debited either their
    /// custom share or `amount / len(split_among)` per occurrence.
    ///
    /// Every record is validated before any arithmetic, so a bad record never
    /// leaves a partial result behind.
    ///
    /// # Errors
    ///
    /// Returns the first `ExpenseError` found, such as `EmptySplit` for a
    /// record with nobody to divide among.
    pub fn compute(
        &self,
        expenses: &[ExpenseRecord],
        members: &[MemberId],
    ) -> Result<BalanceMap, ExpenseError> {
        let lookup: HashSet<&str> = members.iter().map(MemberId::as_str).collect();
        for record in expenses {
            validate_record(record)?;
            if self.policy == MemberPolicy::Strict {
                validate_membership(record, &lookup)?;
            }
        }

        let mut balances = BalanceMap::seeded(members);
        for record in expenses {
            apply(&mut balances, record);
        }

        Ok(balances)
    }
}

fn apply(balances: &mut BalanceMap, record: &ExpenseRecord) {
    balances.credit(&record.paid_by, record.amount);

    if let Some(shares) = record.custom_shares() {
        for (member, share) in shares {
            balances.debit(member, *share);
        }
        return;
    }

    // split_among is non-empty here, checked by validate_record
    let share = record.amount / Decimal::from(record.split_among.len());
    for member in &record.split_among {
        balances.debit(member, share);
    }
}

/// Computes balances, tolerating identifiers outside `members`.
///
/// # Errors
///
/// Returns an `ExpenseError` for a malformed record.
pub fn compute_balances(
    expenses: &[ExpenseRecord],
    members: &[MemberId],
) -> Result<BalanceMap, ExpenseError> {
    BalanceCalculator::permissive().compute(expenses, members)
}
