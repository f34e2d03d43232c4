//! Movement type representing a single signed adjustment to an account.
//!
//! A [`Movement`] is one credit or debit applied to an account's balance.
//! The amount is always strictly positive; the sign is carried solely by the
//! [`MovementKind`], never by a negative amount.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::MovementId;

/// Direction of a movement: determines the sign applied to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Adds the amount to the balance.
    Credit,
    /// Subtracts the amount from the balance.
    Debit,
}

impl MovementKind {
    /// The sign this kind applies: `1` for credit, `-1` for debit.
    #[must_use]
    pub const fn sign(self) -> Decimal {
        match self {
            Self::Credit => Decimal::ONE,
            Self::Debit => Decimal::NEGATIVE_ONE,
        }
    }
}

impl FromStr for MovementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "credit" => Ok(Self::Credit),
            "debit" => Ok(Self::Debit),
            _ => Err(format!("unknown movement kind: {s}")),
        }
    }
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "credit"),
            Self::Debit => write!(f, "debit"),
        }
    }
}

/// A single recorded adjustment to an account's balance.
///
/// Movements are created only by the store; id and timestamp are assigned at
/// creation and never change.
///
/// # Examples
///
/// ```
/// use saldo_core::{Movement, MovementId, MovementKind};
/// use rust_decimal_macros::dec;
/// use chrono::Utc;
///
/// let movement = Movement::new(
///     MovementId::new(1),
///     "Rent",
///     dec!(100.00),
///     MovementKind::Credit,
///     Utc::now(),
/// );
/// assert_eq!(movement.signed_amount(), dec!(100.00));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Unique identifier, assigned at creation.
    pub id: MovementId,
    /// Non-empty descriptive text.
    pub reason: String,
    /// Strictly positive quantity; sign is carried by `kind`.
    pub amount: Decimal,
    /// Whether this movement credits or debits the account.
    pub kind: MovementKind,
    /// Creation timestamp, assigned at creation.
    pub created_at: DateTime<Utc>,
}

impl Movement {
    /// Create a movement.
    #[must_use]
    pub fn new(
        id: MovementId,
        reason: impl Into<String>,
        amount: Decimal,
        kind: MovementKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            reason: reason.into(),
            amount,
            kind,
            created_at,
        }
    }

    /// The amount with its sign applied: positive for credits, negative for debits.
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        self.amount * self.kind.sign()
    }
}
