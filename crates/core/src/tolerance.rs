//! The dead-zone tolerance shared by every balance comparison.

use rust_decimal::Decimal;

/// Balances within `[-BALANCE_EPSILON, BALANCE_EPSILON]` count as settled.
///
/// Also the allowed gap between a custom split's shares and the expense amount.
pub const BALANCE_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Returns true if `balance` lies inside the dead-zone.
#[must_use]
pub fn is_settled(balance: Decimal) -> bool {
    balance.abs() <= BALANCE_EPSILON
}

/// Returns true if the member owes money beyond the dead-zone.
#[must_use]
pub fn is_debtor(balance: Decimal) -> bool {
    balance < -BALANCE_EPSILON
}

/// Returns true if the member is owed money beyond the dead-zone.
#[must_use]
pub fn is_creditor(balance: Decimal) -> bool {
    balance > BALANCE_EPSILON
}

/// Returns true if two amounts agree within the tolerance.
#[must_use]
pub fn amounts_match(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() <= BALANCE_EPSILON
}
