//! Notifications emitted by successful ledger commands.
//!
//! Each mutation that actually changes state pushes one [`Notification`] onto
//! the store's queue; a presentation layer drains the queue and renders each
//! entry as transient feedback (a toast). Commands that no-op emit nothing,
//! so an empty queue after a command means the input was skipped.

use saldo_core::MovementKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named event describing one successful state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event", content = "kind")]
pub enum Notification {
    /// A new account was created.
    AccountCreated,
    /// A movement of the given kind was recorded.
    MovementAdded(MovementKind),
    /// A movement was deleted from an account.
    MovementRemoved,
    /// An account and all its movements were deleted.
    AccountRemoved,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccountCreated => write!(f, "Conta adicionada!"),
            Self::MovementAdded(MovementKind::Credit) => write!(f, "Valor adicionado!"),
            Self::MovementAdded(MovementKind::Debit) => write!(f, "Valor descontado!"),
            Self::MovementRemoved => write!(f, "Movimentação removida!"),
            Self::AccountRemoved => write!(f, "Conta removida!"),
        }
    }
}
