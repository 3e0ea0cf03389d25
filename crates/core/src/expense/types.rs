//! Expense domain types.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitbook_shared::types::{ExpenseId, GroupId, MemberId, UserId};

use crate::category::Category;

/// Per-member shares of a custom split.
pub type CustomAmounts = BTreeMap<MemberId, Decimal>;

/// How an expense is divided among its participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMethod {
    /// Every entry in `split_among` owes `amount / len`.
    #[default]
    Equal,
    /// Each member owes the amount listed in `custom_amounts`.
    Custom,
}

impl std::fmt::Display for SplitMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equal => write!(f, "equal"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// The accounting view of one expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Total cost, positive.
    pub amount: Decimal,
    /// Member who fronted the money.
    pub paid_by: MemberId,
    /// Members sharing the cost. Repeated entries each take one share.
    pub split_among: Vec<MemberId>,
    /// Split rule.
    #[serde(default)]
    pub split_method: SplitMethod,
    /// Shares for a custom split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_amounts: Option<CustomAmounts>,
}

impl ExpenseRecord {
    /// Creates an equally split record.
    #[must_use]
    pub fn equal(
        amount: Decimal,
        paid_by: impl Into<MemberId>,
        split_among: impl IntoIterator<Item = impl Into<MemberId>>,
    ) -> Self {
        Self {
            amount,
            paid_by: paid_by.into(),
            split_among: split_among.into_iter().map(Into::into).collect(),
            split_method: SplitMethod::Equal,
            custom_amounts: None,
        }
    }

    /// Creates a custom split record. `split_among` is taken from the share keys.
    #[must_use]
    pub fn custom(
        amount: Decimal,
        paid_by: impl Into<MemberId>,
        shares: impl IntoIterator<Item = (impl Into<MemberId>, Decimal)>,
    ) -> Self {
        let custom_amounts: CustomAmounts = shares
            .into_iter()
            .map(|(member, share)| (member.into(), share))
            .collect();
        Self {
            amount,
            paid_by: paid_by.into(),
            split_among: custom_amounts.keys().cloned().collect(),
            split_method: SplitMethod::Custom,
            custom_amounts: Some(custom_amounts),
        }
    }

    /// Returns the custom shares if this record is split by them.
    ///
    /// A `custom` record without shares falls back to an equal split.
    #[must_use]
    pub fn custom_shares(&self) -> Option<&CustomAmounts> {
        match self.split_method {
            SplitMethod::Custom => self.custom_amounts.as_ref(),
            SplitMethod::Equal => None,
        }
    }

    /// Every member identifier the record touches, payer first.
    pub fn referenced_members(&self) -> impl Iterator<Item = &MemberId> {
        std::iter::once(&self.paid_by)
            .chain(self.split_among.iter())
            .chain(self.custom_shares().into_iter().flat_map(|shares| shares.keys()))
    }
}

/// A stored expense.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Expense ID.
    pub id: ExpenseId,
    /// Group the expense belongs to.
    pub group_id: GroupId,
    /// Short description, used for categorization.
    pub title: String,
    /// Spending category.
    pub category: Category,
    /// User who recorded the expense.
    pub created_by: UserId,
    /// When the expense was recorded.
    pub created_at: DateTime<Utc>,
    /// Accounting fields.
    #[serde(flatten)]
    pub record: ExpenseRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_custom_constructor_fills_split_among() {
        let record = ExpenseRecord::custom(dec!(100), "A", [("B", dec!(80)), ("A", dec!(20))]);
        assert_eq!(record.split_method, SplitMethod::Custom);
        assert_eq!(
            record.split_among,
            vec![MemberId::from("A"), MemberId::from("B")]
        );
    }

    #[test]
    fn test_custom_without_shares_has_none() {
        let mut record = ExpenseRecord::equal(dec!(10), "A", ["A"]);
        record.split_method = SplitMethod::Custom;
        assert!(record.custom_shares().is_none());
    }

    #[test]
    fn test_equal_ignores_stray_custom_amounts() {
        let mut record = ExpenseRecord::equal(dec!(10), "A", ["A"]);
        record.custom_amounts = Some(CustomAmounts::from([(MemberId::from("Z"), dec!(10))]));
        assert!(record.custom_shares().is_none());
        assert!(!record.referenced_members().any(|m| m.as_str() == "Z"));
    }

    #[test]
    fn test_deserialize_defaults_to_equal() {
        let record: ExpenseRecord = serde_json::from_str(
            r#"{"amount":"90","paid_by":"A","split_among":["A","B","C"]}"#,
        )
        .unwrap();
        assert_eq!(record.split_method, SplitMethod::Equal);
        assert_eq!(record.amount, dec!(90));
    }
}
