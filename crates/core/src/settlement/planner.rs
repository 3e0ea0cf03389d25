//! Greedy debt netting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use splitbook_shared::types::MemberId;

use crate::balance::BalanceMap;
use crate::tolerance::{BALANCE_EPSILON, is_creditor, is_debtor};

/// One recommended payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    /// Member who pays.
    pub from: MemberId,
    /// Member who receives.
    pub to: MemberId,
    /// Amount paid, always at least `BALANCE_EPSILON`.
    pub amount: Decimal,
}

impl Settlement {
    /// Copy with `amount` rounded to `dp` places for display.
    #[must_use]
    pub fn rounded(&self, dp: u32) -> Self {
        Self {
            amount: self.amount.round_dp(dp),
            ..self.clone()
        }
    }
}

struct Party<'a> {
    member: &'a MemberId,
    remaining: Decimal,
}

/// Plans transfers that bring every balance into the dead-zone.
///
/// Debtors (below `-BALANCE_EPSILON`) and creditors (above
/// `BALANCE_EPSILON`) are taken in the map's iteration order, without
/// sorting by size. The first debtor pays the first creditor the smaller of
/// their two remaining amounts; whichever side drops below the tolerance is
/// done and the next one on that side takes over. Stops when either side
/// runs out.
///
/// Emits at most `debtors + creditors - 1` transfers. That is not always the
/// smallest possible count.
#[must_use]
pub fn compute_settlements(balances: &BalanceMap) -> Vec<Settlement> {
    let mut debtors: Vec<Party<'_>> = Vec::new();
    let mut creditors: Vec<Party<'_>> = Vec::new();

    for (member, balance) in balances.iter() {
        if is_debtor(balance) {
            debtors.push(Party {
                member,
                remaining: -balance,
            });
        } else if is_creditor(balance) {
            creditors.push(Party {
                member,
                remaining: balance,
            });
        }
    }

    let mut settlements = Vec::with_capacity((debtors.len() + creditors.len()).saturating_sub(1));
    let (mut d, mut c) = (0, 0);

    while d < debtors.len() && c < creditors.len() {
        let debtor = &mut debtors[d];
        let creditor = &mut creditors[c];
        let amount = debtor.remaining.min(creditor.remaining);

        settlements.push(Settlement {
            from: debtor.member.clone(),
            to: creditor.member.clone(),
            amount,
        });

        debtor.remaining -= amount;
        creditor.remaining -= amount;

        if debtor.remaining < BALANCE_EPSILON {
            d += 1;
        }
        if creditor.remaining < BALANCE_EPSILON {
            c += 1;
        }
    }

    settlements
}

/// Applies transfers to a copy of `balances`: `from` gains, `to` loses.
///
/// A correct plan leaves the result settled.
#[must_use]
pub fn apply_settlements(balances: &BalanceMap, settlements: &[Settlement]) -> BalanceMap {
    let mut after = balances.clone();
    for settlement in settlements {
        after.credit(&settlement.from, settlement.amount);
        after.debit(&settlement.to, settlement.amount);
    }
    after
}
