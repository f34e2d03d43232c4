//! Core types for saldo
//!
//! This crate provides the fundamental types used throughout the saldo project:
//!
//! - [`Account`] - One person's ledger: opening balance plus movement history
//! - [`Movement`] - A single credit or debit against an account
//! - [`MovementKind`] - The sign a movement applies to the balance
//! - [`AccountId`] / [`MovementId`] - Opaque identifier newtypes
//! - [`format`] - Locale-aware currency and date rendering
//!
//! # Example
//!
//! ```
//! use saldo_core::{Account, AccountId, Movement, MovementId, MovementKind};
//! use saldo_core::format::{format_currency, Locale};
//! use rust_decimal_macros::dec;
//! use chrono::Utc;
//!
//! let mut account = Account::new(AccountId::new(1), "Ana", dec!(0), Utc::now());
//!
//! account.prepend_movement(Movement::new(
//!     MovementId::new(1),
//!     "Rent",
//!     dec!(100.00),
//!     MovementKind::Credit,
//!     Utc::now(),
//! ));
//! account.prepend_movement(Movement::new(
//!     MovementId::new(2),
//!     "Food",
//!     dec!(30.00),
//!     MovementKind::Debit,
//!     Utc::now(),
//! ));
//!
//! assert_eq!(account.balance(), dec!(70.00));
//! assert_eq!(format_currency(account.balance(), &Locale::default()), "R$ 70,00");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod account;
pub mod format;
pub mod id;
pub mod movement;

pub use account::Account;
pub use format::{
    format_currency, format_date, format_date_time, format_signed_currency, parse_amount, Locale,
};
pub use id::{AccountId, MovementId, ParseIdError};
pub use movement::{Movement, MovementKind};

// Re-export commonly used external types
pub use chrono::{DateTime, Utc};
pub use rust_decimal::Decimal;
