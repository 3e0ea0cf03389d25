//! Property-based tests for settlement planning.

use std::collections::HashSet;

use proptest::prelude::*;
use rust_decimal::Decimal;
use splitbook_shared::types::MemberId;

use super::planner::{apply_settlements, compute_settlements};
use crate::balance::{BalanceMap, compute_balances};
use crate::expense::ExpenseRecord;
use crate::tolerance::{BALANCE_EPSILON, is_settled};

const NAMES: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];

/// A zero-sum balance map built from random two-party debts.
///
/// Debts move in steps of 0.05 so the only balance inside the dead-zone is
/// an exact zero.
fn balance_strategy() -> impl Strategy<Value = BalanceMap> {
    prop::collection::vec((0usize..8, 0usize..8, 1i64..100_000i64), 0..=30).prop_map(|debts| {
        let mut map = BalanceMap::seeded(&NAMES.map(MemberId::from));
        for (creditor, debtor, nickels) in debts {
            let amount = Decimal::new(nickels * 5, 2);
            map.credit(&MemberId::from(NAMES[creditor]), amount);
            map.debit(&MemberId::from(NAMES[debtor]), amount);
        }
        map
    })
}

/// Balances that went through the calculator, including thirds and sevenths.
fn computed_balance_strategy() -> impl Strategy<Value = BalanceMap> {
    prop::collection::vec(
        (
            100i64..1_000_000i64,
            0usize..8,
            prop::collection::vec(0usize..8, 1..=7),
        ),
        1..=20,
    )
    .prop_map(|raw| {
        let expenses: Vec<ExpenseRecord> = raw
            .into_iter()
            .map(|(cents, payer, split)| {
                ExpenseRecord::equal(
                    Decimal::new(cents, 2),
                    NAMES[payer],
                    split.into_iter().map(|i| NAMES[i]),
                )
            })
            .collect();
        compute_balances(&expenses, &NAMES.map(MemberId::from)).unwrap_or_default()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Applying every transfer settles the group.
    #[test]
    fn prop_plan_settles_everyone(balances in balance_strategy()) {
        let plan = compute_settlements(&balances);
        let after = apply_settlements(&balances, &plan);
        for (member, balance) in after.iter() {
            prop_assert!(is_settled(balance), "{} left at {}", member, balance);
        }
    }

    /// Same property on calculator output with non-terminating divisions.
    #[test]
    fn prop_plan_settles_computed_balances(balances in computed_balance_strategy()) {
        let plan = compute_settlements(&balances);
        prop_assert!(apply_settlements(&balances, &plan).is_settled());
    }

    /// Members inside the dead-zone never pay or receive.
    #[test]
    fn prop_dead_zone_untouched(balances in balance_strategy()) {
        let idle: HashSet<&MemberId> = balances
            .iter()
            .filter(|(_, balance)| is_settled(*balance))
            .map(|(member, _)| member)
            .collect();
        for transfer in compute_settlements(&balances) {
            prop_assert!(!idle.contains(&transfer.from));
            prop_assert!(!idle.contains(&transfer.to));
        }
    }

    /// Every transfer is positive and flows from a debtor to a creditor.
    #[test]
    fn prop_transfers_flow_debtor_to_creditor(balances in balance_strategy()) {
        for transfer in compute_settlements(&balances) {
            prop_assert!(transfer.amount >= BALANCE_EPSILON);
            prop_assert!(balances.get(transfer.from.as_str()).unwrap() < Decimal::ZERO);
            prop_assert!(balances.get(transfer.to.as_str()).unwrap() > Decimal::ZERO);
        }
    }

    /// Transfer count is bounded by debtors + creditors - 1.
    #[test]
    fn prop_transfer_count_bound(balances in balance_strategy()) {
        let active = balances.iter().filter(|(_, b)| !is_settled(*b)).count();
        let plan = compute_settlements(&balances);
        prop_assert!(plan.len() <= active.saturating_sub(1));
    }
}
