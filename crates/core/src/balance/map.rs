//! Insertion-ordered member balances.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};
use splitbook_shared::types::MemberId;

use crate::tolerance::is_settled;

/// Signed net balance per member.
///
/// Positive means the group owes the member, negative means the member owes
/// the group. Iteration follows insertion order: seeded members first, in the
/// order given, then any key that appeared later in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BalanceMap {
    entries: Vec<(MemberId, Decimal)>,
    index: HashMap<MemberId, usize>,
}

impl BalanceMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map with every member at zero.
    ///
    /// Repeated members are seeded once.
    #[must_use]
    pub fn seeded<'a>(members: impl IntoIterator<Item = &'a MemberId>) -> Self {
        let mut map = Self::new();
        for member in members {
            map.slot(member);
        }
        map
    }

    fn slot(&mut self, member: &MemberId) -> &mut Decimal {
        let position = match self.index.get(member) {
            Some(&position) => position,
            None => {
                self.entries.push((member.clone(), Decimal::ZERO));
                let position = self.entries.len() - 1;
                self.index.insert(member.clone(), position);
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Adds `delta` to the member's balance, inserting the member if absent.
    pub fn credit(&mut self, member: &MemberId, delta: Decimal) {
        *self.slot(member) += delta;
    }

    /// Subtracts `delta` from the member's balance, inserting the member if absent.
    pub fn debit(&mut self, member: &MemberId, delta: Decimal) {
        *self.slot(member) -= delta;
    }

    /// Returns the balance of a member.
    #[must_use]
    pub fn get(&self, member: &str) -> Option<Decimal> {
        self.index.get(member).map(|&position| self.entries[position].1)
    }

    /// Returns true if the member has an entry.
    #[must_use]
    pub fn contains(&self, member: &str) -> bool {
        self.index.contains_key(member)
    }

    /// Number of members with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no member has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(member, balance)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&MemberId, Decimal)> {
        self.entries.iter().map(|(member, balance)| (member, *balance))
    }

    /// Member identifiers in insertion order.
    pub fn members(&self) -> impl Iterator<Item = &MemberId> {
        self.entries.iter().map(|(member, _)| member)
    }

    /// Sum of all balances. Zero for a consistent set of expenses.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|(_, balance)| *balance).sum()
    }

    /// Returns true if every balance sits inside the dead-zone.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.entries.iter().all(|(_, balance)| is_settled(*balance))
    }

    /// Rounds every balance to `dp` decimal places for display.
    #[must_use]
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .map(|(member, balance)| (member.clone(), balance.round_dp(dp)))
                .collect(),
            index: self.index.clone(),
        }
    }
}

impl Serialize for BalanceMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (member, balance) in &self.entries {
            map.serialize_entry(member, balance)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn id(s: &str) -> MemberId {
        MemberId::from(s)
    }

    #[test]
    fn test_seeded_keeps_order_and_dedups() {
        let members = [id("C"), id("A"), id("C"), id("B")];
        let map = BalanceMap::seeded(&members);
        let order: Vec<&str> = map.members().map(MemberId::as_str).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
        assert!(map.iter().all(|(_, b)| b.is_zero()));
    }

    #[test]
    fn test_new_keys_append() {
        let mut map = BalanceMap::seeded(&[id("A")]);
        map.credit(&id("Z"), dec!(5));
        map.debit(&id("A"), dec!(5));
        let order: Vec<&str> = map.members().map(MemberId::as_str).collect();
        assert_eq!(order, vec!["A", "Z"]);
        assert_eq!(map.get("Z"), Some(dec!(5)));
        assert_eq!(map.get("A"), Some(dec!(-5)));
        assert_eq!(map.total(), Decimal::ZERO);
    }

    #[test]
    fn test_settled_uses_dead_zone() {
        let mut map = BalanceMap::seeded(&[id("A"), id("B")]);
        map.credit(&id("A"), dec!(0.005));
        map.debit(&id("B"), dec!(0.005));
        assert!(map.is_settled());
    }

    #[test]
    fn test_serializes_in_order() {
        let mut map = BalanceMap::seeded(&[id("B"), id("A")]);
        map.credit(&id("B"), dec!(1.50));
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"B":"1.50","A":"0"}"#);
    }

    #[test]
    fn test_rounded() {
        let mut map = BalanceMap::seeded(&[id("A")]);
        map.credit(&id("A"), dec!(33.333333));
        assert_eq!(map.rounded(2).get("A"), Some(dec!(33.33)));
    }
}
