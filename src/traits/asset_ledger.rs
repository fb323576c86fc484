//! The external asset-ledger collaborator.
//!
//! The pool never keeps asset balances for accounts itself.  It asks an
//! [`AssetLedger`] to move funds between an account and pool custody, and
//! treats each call as atomic:
//!
//! - [`AssetLedger::debit`] moves `amount` from the account into custody,
//!   or fails having moved nothing.
//! - [`AssetLedger::credit`] moves `amount` out of custody to the account
//!   and cannot fail once the matching debit succeeded.
//!
//! Transfer authorization, account addressing, and persistence are the
//! implementor's concern.

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;

/// Debit/credit capability the pool requires from each asset's ledger.
///
/// # Implementors
///
/// - [`InMemoryLedger`](crate::ledger::InMemoryLedger) — reference
///   implementation with balances and allowances.
pub trait AssetLedger {
    /// Moves `amount` of `asset` from `from` into pool custody.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientBalance`] if `from` holds less than `amount`.
    /// - [`AmmError::Unauthorized`] if the pool may not move that much of
    ///   `from`'s funds, including when `from` is the pool's own custody
    ///   account.
    ///
    /// On error nothing has moved.
    fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), AmmError>;

    /// Moves `amount` of `asset` out of pool custody to `to`.
    fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount);

    /// Reverses a successful [`debit`](Self::debit) of `amount` from `to`.
    ///
    /// Called when a later step of the same transition fails.  The default
    /// is a plain [`credit`](Self::credit); implementations that track
    /// authorization should also restore what the debit consumed.
    fn refund(&mut self, asset: AssetId, to: AccountId, amount: Amount) {
        self.credit(asset, to, amount);
    }
}

impl<L: AssetLedger + ?Sized> AssetLedger for &mut L {
    fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), AmmError> {
        (**self).debit(asset, from, amount)
    }

    fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount) {
        (**self).credit(asset, to, amount);
    }

    fn refund(&mut self, asset: AssetId, to: AccountId, amount: Amount) {
        (**self).refund(asset, to, amount);
    }
}
