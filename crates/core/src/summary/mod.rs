//! Group spending summary.
//!
//! Single-pass reductions over a group's expenses plus the balance and
//! settlement results for the same snapshot.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use splitbook_shared::types::MemberId;

use crate::balance::{BalanceCalculator, BalanceMap};
use crate::category::Category;
use crate::expense::{Expense, ExpenseError, ExpenseRecord};
use crate::settlement::{Settlement, compute_settlements};

/// Decimal places used when presenting money.
pub const DISPLAY_DP: u32 = 2;

/// Everything the group overview shows.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    /// Sum of all expense amounts.
    pub total_spending: Decimal,
    /// Number of expenses.
    pub expense_count: usize,
    /// `total_spending / expense_count`, zero when there are no expenses.
    pub average_expense: Decimal,
    /// Spending per category; categories without spending are omitted.
    pub category_totals: BTreeMap<Category, Decimal>,
    /// Newest expenses first.
    pub recent_expenses: Vec<Expense>,
    /// Net balance per member.
    pub balances: BalanceMap,
    /// Transfers that settle the group.
    pub settlements: Vec<Settlement>,
}

impl GroupSummary {
    /// Builds the summary for one snapshot of a group.
    ///
    /// # Errors
    ///
    /// Returns an `ExpenseError` if the balances cannot be computed.
    pub fn build(
        calculator: &BalanceCalculator,
        expenses: &[Expense],
        members: &[MemberId],
        recent_limit: usize,
    ) -> Result<Self, ExpenseError> {
        let records: Vec<ExpenseRecord> = expenses.iter().map(|e| e.record.clone()).collect();
        let balances = calculator.compute(&records, members)?;
        let settlements = compute_settlements(&balances);

        let mut total_spending = Decimal::ZERO;
        let mut category_totals: BTreeMap<Category, Decimal> = BTreeMap::new();
        for expense in expenses {
            total_spending += expense.record.amount;
            *category_totals.entry(expense.category).or_default() += expense.record.amount;
        }

        let average_expense = if expenses.is_empty() {
            Decimal::ZERO
        } else {
            (total_spending / Decimal::from(expenses.len())).round_dp(DISPLAY_DP)
        };

        let mut recent_expenses = expenses.to_vec();
        recent_expenses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_expenses.truncate(recent_limit);

        Ok(Self {
            total_spending,
            expense_count: expenses.len(),
            average_expense,
            category_totals,
            recent_expenses,
            balances: balances.rounded(DISPLAY_DP),
            settlements: settlements.iter().map(|s| s.rounded(DISPLAY_DP)).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal_macros::dec;
    use splitbook_shared::types::{ExpenseId, GroupId, UserId};

    fn expense(title: &str, category: Category, record: ExpenseRecord, minutes: i64) -> Expense {
        Expense {
            id: ExpenseId::new(),
            group_id: GroupId::from_uuid(uuid::Uuid::nil()),
            title: title.to_string(),
            category,
            created_by: UserId::from_uuid(uuid::Uuid::nil()),
            created_at: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
                + Duration::minutes(minutes),
            record,
        }
    }

    fn members() -> Vec<MemberId> {
        ["A", "B", "C"].into_iter().map(MemberId::from).collect()
    }

    #[test]
    fn test_summary_totals() {
        let expenses = vec![
            expense("Dinner", Category::Food, ExpenseRecord::equal(dec!(90), "A", ["A", "B", "C"]), 0),
            expense("Taxi", Category::Transport, ExpenseRecord::equal(dec!(30), "B", ["A", "B", "C"]), 5),
            expense("Lunch", Category::Food, ExpenseRecord::equal(dec!(15), "C", ["C"]), 10),
        ];
        let summary =
            GroupSummary::build(&BalanceCalculator::strict(), &expenses, &members(), 2).unwrap();

        assert_eq!(summary.total_spending, dec!(135));
        assert_eq!(summary.expense_count, 3);
        assert_eq!(summary.average_expense, dec!(45));
        assert_eq!(summary.category_totals.get(&Category::Food), Some(&dec!(105)));
        assert_eq!(summary.category_totals.get(&Category::Transport), Some(&dec!(30)));
        assert!(!summary.category_totals.contains_key(&Category::Other));

        let titles: Vec<&str> = summary.recent_expenses.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Lunch", "Taxi"]);

        assert_eq!(summary.balances.get("A"), Some(dec!(50)));
        assert_eq!(summary.balances.get("B"), Some(dec!(-10)));
        assert_eq!(summary.balances.get("C"), Some(dec!(-40)));
        assert_eq!(summary.settlements.len(), 2);
    }

    #[test]
    fn test_empty_group() {
        let summary =
            GroupSummary::build(&BalanceCalculator::strict(), &[], &members(), 5).unwrap();
        assert_eq!(summary.total_spending, Decimal::ZERO);
        assert_eq!(summary.average_expense, Decimal::ZERO);
        assert!(summary.recent_expenses.is_empty());
        assert!(summary.settlements.is_empty());
        assert_eq!(summary.balances.len(), 3);
    }

    #[test]
    fn test_display_rounding() {
        let expenses = vec![expense(
            "Groceries",
            Category::Groceries,
            ExpenseRecord::equal(dec!(100), "A", ["A", "B", "C"]),
            0,
        )];
        let summary =
            GroupSummary::build(&BalanceCalculator::strict(), &expenses, &members(), 5).unwrap();
        assert_eq!(summary.balances.get("B"), Some(dec!(-33.33)));
        assert_eq!(summary.balances.get("A"), Some(dec!(66.67)));
        assert!(summary.settlements.iter().all(|s| s.amount == dec!(33.33)));
    }

    #[test]
    fn test_strict_summary_rejects_strangers() {
        let expenses = vec![expense(
            "Gift",
            Category::Other,
            ExpenseRecord::equal(dec!(10), "Z", ["A"]),
            0,
        )];
        assert!(GroupSummary::build(&BalanceCalculator::strict(), &expenses, &members(), 5).is_err());
    }
}
