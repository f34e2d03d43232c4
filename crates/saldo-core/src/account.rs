//! Account type: one person's ledger with an opening balance and a movement history.
//!
//! An [`Account`] exclusively owns its [`Movement`]s. The balance is never
//! stored; it is derived on every read by folding the movement history over
//! the opening balance.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Movement, MovementId};

/// A named ledger belonging to one person.
///
/// Movements are kept newest-first by insertion order. The order is a display
/// concern only: balances are sums, so any order yields the same result.
///
/// # Examples
///
/// ```
/// use saldo_core::{Account, AccountId, Movement, MovementId, MovementKind};
/// use rust_decimal_macros::dec;
/// use chrono::Utc;
///
/// let mut account = Account::new(AccountId::new(1), "Ana", dec!(0), Utc::now());
/// account.prepend_movement(Movement::new(
///     MovementId::new(1),
///     "Rent",
///     dec!(100),
///     MovementKind::Credit,
///     Utc::now(),
/// ));
/// assert_eq!(account.balance(), dec!(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned at creation.
    pub id: AccountId,
    /// Non-empty person name.
    pub owner: String,
    /// Starting balance; may be zero, positive, or negative.
    pub opening_balance: Decimal,
    /// Movement history, newest first by insertion.
    movements: Vec<Movement>,
    /// Creation timestamp, assigned at creation.
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Create an account with an empty movement history.
    #[must_use]
    pub fn new(
        id: AccountId,
        owner: impl Into<String>,
        opening_balance: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            opening_balance,
            movements: Vec::new(),
            created_at,
        }
    }

    /// Movement history, newest first.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Whether the account has no movements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Number of recorded movements.
    #[must_use]
    pub fn movement_count(&self) -> usize {
        self.movements.len()
    }

    /// Look up a movement by id.
    #[must_use]
    pub fn movement(&self, id: MovementId) -> Option<&Movement> {
        self.movements.iter().find(|m| m.id == id)
    }

    /// Insert a movement at the front of the history (newest first).
    pub fn prepend_movement(&mut self, movement: Movement) {
        self.movements.insert(0, movement);
    }

    /// Remove the movement with the given id, returning it if present.
    pub fn remove_movement(&mut self, id: MovementId) -> Option<Movement> {
        let index = self.movements.iter().position(|m| m.id == id)?;
        Some(self.movements.remove(index))
    }

    /// Current balance: opening balance plus the net effect of all movements.
    ///
    /// Derived on every call, never cached. Credits add, debits subtract;
    /// addition commutes, so the newest-first storage order is irrelevant.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.movements
            .iter()
            .fold(self.opening_balance, |acc, m| acc + m.signed_amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MovementKind;
    use rust_decimal_macros::dec;

    fn account(opening: Decimal) -> Account {
        Account::new(AccountId::new(1), "Ana", opening, Utc::now())
    }

    fn movement(id: u64, amount: Decimal, kind: MovementKind) -> Movement {
        Movement::new(MovementId::new(id), "test", amount, kind, Utc::now())
    }

    #[test]
    fn test_new_account_has_empty_history_and_opening_balance() {
        let account = account(dec!(0));
        assert!(account.is_empty());
        assert_eq!(account.movement_count(), 0);
        assert_eq!(account.balance(), dec!(0));
    }

    #[test]
    fn test_balance_folds_credits_and_debits() {
        let mut account = account(dec!(0));
        account.prepend_movement(movement(1, dec!(100), MovementKind::Credit));
        account.prepend_movement(movement(2, dec!(30), MovementKind::Debit));
        assert_eq!(account.balance(), dec!(70));
    }

    #[test]
    fn test_balance_starts_from_opening_balance() {
        let mut account = account(dec!(-50.25));
        account.prepend_movement(movement(1, dec!(10.25), MovementKind::Credit));
        assert_eq!(account.balance(), dec!(-40.00));
    }

    #[test]
    fn test_movements_are_newest_first() {
        let mut account = account(dec!(0));
        account.prepend_movement(movement(1, dec!(1), MovementKind::Credit));
        account.prepend_movement(movement(2, dec!(2), MovementKind::Credit));
        let ids: Vec<u64> = account.movements().iter().map(|m| m.id.get()).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn test_remove_movement() {
        let mut account = account(dec!(0));
        account.prepend_movement(movement(1, dec!(5), MovementKind::Credit));
        let removed = account.remove_movement(MovementId::new(1)).unwrap();
        assert_eq!(removed.amount, dec!(5));
        assert!(account.is_empty());
    }

    #[test]
    fn test_remove_unknown_movement_leaves_history_unchanged() {
        let mut account = account(dec!(0));
        account.prepend_movement(movement(1, dec!(5), MovementKind::Credit));
        assert!(account.remove_movement(MovementId::new(99)).is_none());
        assert_eq!(account.movement_count(), 1);
    }

    #[test]
    fn test_movement_lookup() {
        let mut account = account(dec!(0));
        account.prepend_movement(movement(3, dec!(9), MovementKind::Debit));
        assert_eq!(account.movement(MovementId::new(3)).unwrap().amount, dec!(9));
        assert!(account.movement(MovementId::new(4)).is_none());
    }
}
