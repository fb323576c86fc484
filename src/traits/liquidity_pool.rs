//! Share-based liquidity provision on top of [`SwapPool`].
//!
//! # Share Accounting Invariant
//!
//! Outstanding shares change only through
//! [`LiquidityPool::add_liquidity`] and [`LiquidityPool::remove_liquidity`],
//! and always satisfy:
//!
//! ```text
//! total_shares = Σ shares_of(provider)   for all providers
//! ```
//!
//! Reserves are zero exactly when `total_shares` is zero.

use super::SwapPool;
use crate::domain::{AccountId, Amount, LiquidityAdded, LiquidityRemoved, Shares};
use crate::error::AmmError;
use crate::traits::AssetLedger;

/// Trait for pools that mint and burn fungible liquidity shares.
///
/// # Implementors
///
/// - `ConstantProductPool`
pub trait LiquidityPool: SwapPool {
    /// Deposits `amount_a` and `amount_b` from `provider` and mints shares.
    ///
    /// The first deposit mints `floor(sqrt(amount_a × amount_b))` and sets
    /// the initial price.  Later deposits mint the smaller of the two
    /// proportional claims; any excess stays in the pool unclaimed.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either amount is zero.
    /// - [`AmmError::InsufficientLiquidityMinted`] if no shares would be
    ///   minted.
    /// - [`AmmError::InsufficientBalance`] / [`AmmError::Unauthorized`]
    ///   propagated from either ledger debit.
    /// - [`AmmError::Overflow`] if a reserve or the share supply would
    ///   exceed `u128`.
    fn add_liquidity<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityAdded, AmmError>;

    /// Burns `shares` held by `provider` and pays out the pro-rata slice of
    /// both reserves, truncated.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `provider` holds fewer than
    ///   `shares`.
    /// - [`AmmError::InsufficientAmounts`] if either payout rounds to zero.
    fn remove_liquidity<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        shares: Shares,
    ) -> Result<LiquidityRemoved, AmmError>;

    /// Returns the total outstanding shares.
    #[must_use]
    fn total_shares(&self) -> Shares;

    /// Returns the shares held by `provider`; zero for unknown providers.
    #[must_use]
    fn shares_of(&self, provider: &AccountId) -> Shares;
}
