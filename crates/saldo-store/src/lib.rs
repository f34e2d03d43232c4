//! In-memory ledger store for saldo
//!
//! [`LedgerStore`] owns the full collection of accounts and exposes the four
//! mutation commands (create account, add movement, remove movement, remove
//! account) plus derived reads (per-account balance, aggregate totals).
//!
//! Two contract points worth knowing up front:
//!
//! - **Silent no-ops.** Precondition failures (blank owner or reason,
//!   non-positive amount, unknown id) skip the command entirely: state is
//!   unchanged, nothing is returned, and no notification is queued. There is
//!   no error type on the command path.
//! - **Derived balances.** Balances and totals are recomputed from the
//!   movement history on every read; the store never caches them.
//!
//! Execution is single-threaded and synchronous; every command runs to
//! completion before the next begins. A host that shares the store across
//! threads must serialize mutations itself.
//!
//! # Example
//!
//! ```
//! use saldo_store::{LedgerStore, Notification};
//! use saldo_core::MovementKind;
//! use rust_decimal_macros::dec;
//!
//! let mut store = LedgerStore::new();
//!
//! let id = store.create_account("Ana", None).map(|a| a.id).unwrap();
//! store.add_movement(id, "Rent", dec!(100), MovementKind::Credit);
//! store.add_movement(id, "Food", dec!(30), MovementKind::Debit);
//!
//! assert_eq!(store.balance_of(id), Some(dec!(70)));
//!
//! let totals = store.aggregate_totals();
//! assert_eq!(totals.total_credit, dec!(70));
//! assert_eq!(totals.net, dec!(70));
//!
//! assert_eq!(
//!     store.take_notifications(),
//!     vec![
//!         Notification::AccountCreated,
//!         Notification::MovementAdded(MovementKind::Credit),
//!         Notification::MovementAdded(MovementKind::Debit),
//!     ],
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod notify;

pub use notify::Notification;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use saldo_core::{Account, AccountId, Movement, MovementId, MovementKind};

/// Sums of positive and negative balances across all accounts.
///
/// Accounts with a zero balance contribute to neither side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of all strictly positive account balances.
    pub total_credit: Decimal,
    /// Sum of the absolute values of all strictly negative account balances.
    pub total_debit: Decimal,
    /// `total_credit - total_debit`.
    pub net: Decimal,
}

/// The ledger: an ordered collection of accounts, newest first.
///
/// All state is in-memory and lives only for the duration of the session.
#[derive(Debug, Default)]
pub struct LedgerStore {
    /// Accounts in display order, newest first.
    accounts: Vec<Account>,
    /// Queued notifications, oldest first; drained by the presentation layer.
    notifications: Vec<Notification>,
    next_account_id: u64,
    next_movement_id: u64,
}

impl LedgerStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All accounts in display order (newest first).
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Look up an account by id.
    #[must_use]
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store has no accounts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Create a new account for `owner`, inserted at the front of the display
    /// order.
    ///
    /// `opening_balance` defaults to zero. A blank `owner` skips the command:
    /// no account, no notification, `None` returned.
    pub fn create_account(
        &mut self,
        owner: &str,
        opening_balance: Option<Decimal>,
    ) -> Option<&Account> {
        if owner.trim().is_empty() {
            tracing::trace!("Skipped account creation: blank owner");
            return None;
        }

        let id = AccountId::new(self.next_account_id);
        self.next_account_id += 1;

        let account = Account::new(
            id,
            owner,
            opening_balance.unwrap_or(Decimal::ZERO),
            Utc::now(),
        );
        self.accounts.insert(0, account);
        self.notifications.push(Notification::AccountCreated);
        tracing::debug!("Created account {} for {:?}", id, owner);

        self.accounts.first()
    }

    /// Record a movement against an account, prepended to its history.
    ///
    /// Skipped (no state change, no notification, `None`) when `reason` is
    /// blank, `amount` is not strictly positive, or `account_id` is unknown.
    /// No other account is touched.
    pub fn add_movement(
        &mut self,
        account_id: AccountId,
        reason: &str,
        amount: Decimal,
        kind: MovementKind,
    ) -> Option<&Movement> {
        if reason.trim().is_empty() {
            tracing::trace!("Skipped movement on account {}: blank reason", account_id);
            return None;
        }
        if amount <= Decimal::ZERO {
            tracing::trace!(
                "Skipped movement on account {}: non-positive amount {}",
                account_id,
                amount
            );
            return None;
        }
        let Some(index) = self.accounts.iter().position(|a| a.id == account_id) else {
            tracing::trace!("Skipped movement: unknown account {}", account_id);
            return None;
        };

        let id = MovementId::new(self.next_movement_id);
        self.next_movement_id += 1;

        self.accounts[index].prepend_movement(Movement::new(id, reason, amount, kind, Utc::now()));
        self.notifications.push(Notification::MovementAdded(kind));
        tracing::debug!("Recorded {} of {} on account {}", kind, amount, account_id);

        self.accounts[index].movements().first()
    }

    /// Delete the movement with `movement_id` from the given account.
    ///
    /// Silent no-op when either id is absent; a notification is queued only
    /// when a movement was actually removed.
    pub fn remove_movement(&mut self, account_id: AccountId, movement_id: MovementId) {
        let Some(index) = self.accounts.iter().position(|a| a.id == account_id) else {
            tracing::trace!("Skipped movement removal: unknown account {}", account_id);
            return;
        };

        if self.accounts[index].remove_movement(movement_id).is_some() {
            self.notifications.push(Notification::MovementRemoved);
            tracing::debug!("Removed movement {} from account {}", movement_id, account_id);
        } else {
            tracing::trace!(
                "Skipped movement removal: no movement {} on account {}",
                movement_id,
                account_id
            );
        }
    }

    /// Delete an account and all its movements.
    ///
    /// Silent no-op when the id is absent; a notification is queued only when
    /// an account was actually removed.
    pub fn remove_account(&mut self, account_id: AccountId) {
        let Some(index) = self.accounts.iter().position(|a| a.id == account_id) else {
            tracing::trace!("Skipped account removal: unknown account {}", account_id);
            return;
        };

        self.accounts.remove(index);
        self.notifications.push(Notification::AccountRemoved);
        tracing::debug!("Removed account {}", account_id);
    }

    /// Current balance of an account, or `None` if the id is unknown.
    ///
    /// Derived on every call from the opening balance and movement history.
    #[must_use]
    pub fn balance_of(&self, account_id: AccountId) -> Option<Decimal> {
        self.account(account_id).map(Account::balance)
    }

    /// Sum positive and negative balances across all accounts.
    #[must_use]
    pub fn aggregate_totals(&self) -> Totals {
        let mut total_credit = Decimal::ZERO;
        let mut total_debit = Decimal::ZERO;

        for account in &self.accounts {
            let balance = account.balance();
            if balance > Decimal::ZERO {
                total_credit += balance;
            } else if balance < Decimal::ZERO {
                total_debit += balance.abs();
            }
        }

        Totals {
            total_credit,
            total_debit,
            net: total_credit - total_debit,
        }
    }

    /// Notifications queued since the last drain, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drain the notification queue, returning its contents oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn store_with_account(owner: &str) -> (LedgerStore, AccountId) {
        let mut store = LedgerStore::new();
        let id = store.create_account(owner, None).map(|a| a.id).unwrap();
        store.take_notifications();
        (store, id)
    }

    #[test]
    fn test_create_account_defaults_to_zero_opening_balance() {
        let mut store = LedgerStore::new();
        let account = store.create_account("Ana", None).unwrap();
        assert_eq!(account.opening_balance, dec!(0));
        assert!(account.is_empty());
        assert_eq!(store.take_notifications(), vec![Notification::AccountCreated]);
    }

    #[test]
    fn test_create_account_with_opening_balance() {
        let mut store = LedgerStore::new();
        let account = store.create_account("Ana", Some(dec!(-12.50))).unwrap();
        assert_eq!(account.opening_balance, dec!(-12.50));
    }

    #[test]
    fn test_create_account_blank_owner_is_silent_noop() {
        let mut store = LedgerStore::new();
        assert!(store.create_account("", None).is_none());
        assert!(store.create_account("   ", Some(dec!(10))).is_none());
        assert!(store.is_empty());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_newest_account_first() {
        let mut store = LedgerStore::new();
        store.create_account("Ana", None);
        store.create_account("Bruno", None);
        let owners: Vec<&str> = store.accounts().iter().map(|a| a.owner.as_str()).collect();
        assert_eq!(owners, vec!["Bruno", "Ana"]);
    }

    #[test]
    fn test_add_movement_updates_balance() {
        let (mut store, id) = store_with_account("Ana");
        store.add_movement(id, "Rent", dec!(100), MovementKind::Credit);
        store.add_movement(id, "Food", dec!(30), MovementKind::Debit);
        assert_eq!(store.balance_of(id), Some(dec!(70)));
        assert_eq!(
            store.take_notifications(),
            vec![
                Notification::MovementAdded(MovementKind::Credit),
                Notification::MovementAdded(MovementKind::Debit),
            ],
        );
    }

    #[test]
    fn test_add_movement_prepends() {
        let (mut store, id) = store_with_account("Ana");
        store.add_movement(id, "first", dec!(1), MovementKind::Credit);
        store.add_movement(id, "second", dec!(2), MovementKind::Credit);
        let reasons: Vec<&str> = store
            .account(id)
            .unwrap()
            .movements()
            .iter()
            .map(|m| m.reason.as_str())
            .collect();
        assert_eq!(reasons, vec!["second", "first"]);
    }

    #[test]
    fn test_add_movement_blank_reason_is_silent_noop() {
        let (mut store, id) = store_with_account("Ana");
        assert!(store.add_movement(id, "  ", dec!(10), MovementKind::Credit).is_none());
        assert!(store.account(id).unwrap().is_empty());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_add_movement_non_positive_amount_is_silent_noop() {
        let (mut store, id) = store_with_account("Ana");
        assert!(store.add_movement(id, "Rent", dec!(0), MovementKind::Credit).is_none());
        assert!(store.add_movement(id, "Rent", dec!(-5), MovementKind::Debit).is_none());
        assert!(store.account(id).unwrap().is_empty());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_add_movement_unknown_account_is_silent_noop() {
        let (mut store, id) = store_with_account("Ana");
        let other = AccountId::new(999);
        assert!(store.add_movement(other, "Rent", dec!(10), MovementKind::Credit).is_none());
        assert!(store.account(id).unwrap().is_empty());
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_add_movement_does_not_touch_other_accounts() {
        let mut store = LedgerStore::new();
        let ana = store.create_account("Ana", None).map(|a| a.id).unwrap();
        let bruno = store.create_account("Bruno", None).map(|a| a.id).unwrap();
        store.add_movement(ana, "Rent", dec!(10), MovementKind::Credit);
        assert_eq!(store.account(bruno).unwrap().movement_count(), 0);
        assert_eq!(store.balance_of(bruno), Some(dec!(0)));
    }

    #[test]
    fn test_remove_movement() {
        let (mut store, id) = store_with_account("Ana");
        let movement_id = store
            .add_movement(id, "Rent", dec!(10), MovementKind::Credit)
            .map(|m| m.id)
            .unwrap();
        store.take_notifications();

        store.remove_movement(id, movement_id);
        assert!(store.account(id).unwrap().is_empty());
        assert_eq!(store.take_notifications(), vec![Notification::MovementRemoved]);
    }

    #[test]
    fn test_remove_unknown_movement_is_silent_noop() {
        let (mut store, id) = store_with_account("Ana");
        store.add_movement(id, "Rent", dec!(10), MovementKind::Credit);
        store.take_notifications();

        store.remove_movement(id, MovementId::new(999));
        assert_eq!(store.account(id).unwrap().movement_count(), 1);
        assert!(store.notifications().is_empty());

        store.remove_movement(AccountId::new(999), MovementId::new(0));
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_remove_account_discards_movements() {
        let (mut store, id) = store_with_account("Ana");
        store.add_movement(id, "Rent", dec!(10), MovementKind::Credit);
        store.take_notifications();

        store.remove_account(id);
        assert!(store.is_empty());
        assert_eq!(store.account(id), None);
        assert_eq!(store.balance_of(id), None);
        assert_eq!(store.take_notifications(), vec![Notification::AccountRemoved]);
    }

    #[test]
    fn test_remove_unknown_account_is_silent_noop() {
        let (mut store, _) = store_with_account("Ana");
        store.remove_account(AccountId::new(999));
        assert_eq!(store.len(), 1);
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_account_ids_are_unique_across_removals() {
        let mut store = LedgerStore::new();
        let first = store.create_account("Ana", None).map(|a| a.id).unwrap();
        store.remove_account(first);
        let second = store.create_account("Ana", None).map(|a| a.id).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_aggregate_totals() {
        let mut store = LedgerStore::new();
        let pos = store.create_account("Ana", None).map(|a| a.id).unwrap();
        let neg = store.create_account("Bruno", None).map(|a| a.id).unwrap();
        store.create_account("Carla", None); // zero balance

        store.add_movement(pos, "Rent", dec!(100), MovementKind::Credit);
        store.add_movement(pos, "Food", dec!(30), MovementKind::Debit);
        store.add_movement(neg, "Loan", dec!(200), MovementKind::Debit);

        let totals = store.aggregate_totals();
        assert_eq!(totals.total_credit, dec!(70));
        assert_eq!(totals.total_debit, dec!(200));
        assert_eq!(totals.net, dec!(-130));
    }

    #[test]
    fn test_aggregate_totals_on_empty_store() {
        let store = LedgerStore::new();
        let totals = store.aggregate_totals();
        assert_eq!(totals.total_credit, dec!(0));
        assert_eq!(totals.total_debit, dec!(0));
        assert_eq!(totals.net, dec!(0));
    }

    #[test]
    fn test_take_notifications_drains_queue() {
        let mut store = LedgerStore::new();
        store.create_account("Ana", None);
        assert_eq!(store.notifications().len(), 1);
        assert_eq!(store.take_notifications(), vec![Notification::AccountCreated]);
        assert!(store.notifications().is_empty());
        assert!(store.take_notifications().is_empty());
    }
}
