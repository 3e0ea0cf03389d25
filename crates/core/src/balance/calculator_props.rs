//! Property-based tests for the balance calculator.
//!
//! Properties: zero-sum, equal-split exactness, custom-split exactness,
//! determinism.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use splitbook_shared::types::MemberId;

use super::calculator::{BalanceCalculator, compute_balances};
use crate::expense::{ExpenseRecord, MAX_EXPENSE_AMOUNT};

const MEMBERS: [&str; 6] = ["ana", "ben", "cho", "dev", "eli", "fay"];

fn member_list(count: usize) -> Vec<MemberId> {
    MEMBERS[..count].iter().copied().map(MemberId::from).collect()
}

/// Everyday amounts from 0.01 to 10,000.00, plus amounts just below the cap.
fn amount_strategy() -> impl Strategy<Value = Decimal> {
    let cap_cents = i64::try_from(MAX_EXPENSE_AMOUNT.mantissa()).unwrap_or(i64::MAX);
    prop_oneof![
        4 => (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        1 => (cap_cents - 1_000_000..=cap_cents).prop_map(|cents| Decimal::new(cents, 2)),
    ]
}

/// An equal-split record over a group of `count` members.
fn equal_record(count: usize) -> impl Strategy<Value = ExpenseRecord> {
    (
        amount_strategy(),
        0..count,
        prop::collection::vec(0..count, 1..=8),
    )
        .prop_map(|(amount, payer, split)| {
            ExpenseRecord::equal(
                amount,
                MEMBERS[payer],
                split.into_iter().map(|i| MEMBERS[i]),
            )
        })
}

/// A custom-split record whose shares add up exactly.
fn custom_record(count: usize) -> impl Strategy<Value = ExpenseRecord> {
    (
        0..count,
        prop::collection::btree_map(0..count, 1i64..100_000i64, 1..=count),
    )
        .prop_map(|(payer, cents_by_member)| {
            let shares: Vec<(&str, Decimal)> = cents_by_member
                .into_iter()
                .map(|(i, cents)| (MEMBERS[i], Decimal::new(cents, 2)))
                .collect();
            let amount = shares.iter().map(|(_, share)| *share).sum();
            ExpenseRecord::custom(amount, MEMBERS[payer], shares)
        })
}

fn group_strategy() -> impl Strategy<Value = (Vec<MemberId>, Vec<ExpenseRecord>)> {
    (2usize..=MEMBERS.len()).prop_flat_map(|count| {
        let record = prop_oneof![equal_record(count), custom_record(count)];
        (
            Just(member_list(count)),
            prop::collection::vec(record, 0..=25),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Balances of a valid group always net to zero.
    #[test]
    fn prop_balances_sum_to_zero((members, expenses) in group_strategy()) {
        let balances = compute_balances(&expenses, &members).unwrap();
        prop_assert!(
            balances.total().abs() < dec!(0.000001),
            "total was {}",
            balances.total()
        );
    }

    /// The seeded key set is exactly the member list when every payer is a member.
    #[test]
    fn prop_keys_are_members((members, expenses) in group_strategy()) {
        let balances = compute_balances(&expenses, &members).unwrap();
        let keys: Vec<&MemberId> = balances.members().collect();
        let expected: Vec<&MemberId> = members.iter().collect();
        prop_assert_eq!(keys, expected);
    }

    /// Equal split: each occurrence costs A/n, payer gains A.
    #[test]
    fn prop_equal_split_exact(amount in amount_strategy(), n in 1usize..=5) {
        let people = member_list(6);
        let participants: Vec<&str> = MEMBERS[1..=n].to_vec();
        let record = ExpenseRecord::equal(amount, MEMBERS[0], participants);
        let balances = compute_balances(&[record], &people).unwrap();

        let share = amount / Decimal::from(n);
        prop_assert_eq!(balances.get(MEMBERS[0]), Some(amount));
        for name in &MEMBERS[1..=n] {
            prop_assert_eq!(balances.get(name), Some(-share));
        }
    }

    /// Custom split: each participant loses exactly their share.
    #[test]
    fn prop_custom_split_exact(record in custom_record(6)) {
        let people = member_list(6);
        let balances = compute_balances(std::slice::from_ref(&record), &people).unwrap();

        let shares = record.custom_amounts.clone().unwrap();
        for member in &people {
            let mut expected = Decimal::ZERO;
            if *member == record.paid_by {
                expected += record.amount;
            }
            if let Some(share) = shares.get(member) {
                expected -= *share;
            }
            prop_assert_eq!(balances.get(member.as_str()), Some(expected));
        }
    }

    /// Recomputation yields identical output.
    #[test]
    fn prop_deterministic((members, expenses) in group_strategy()) {
        let first = BalanceCalculator::strict().compute(&expenses, &members).unwrap();
        let second = BalanceCalculator::strict().compute(&expenses, &members).unwrap();
        prop_assert_eq!(first, second);
    }
}
