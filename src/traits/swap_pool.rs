//! Swap execution and read-only pool queries.
//!
//! [`SwapPool`] covers everything a trader needs: execute a swap, and
//! inspect the pair, reserves, and spot price the swap will be priced
//! against.
//!
//! # Fee Invariant
//!
//! Every swap levies the fixed 0.3% fee on the input side before applying
//! the curve, so the product of reserves never decreases:
//!
//! ```text
//! amount_out = in × 997 × reserve_out / (reserve_in × 1000 + in × 997)
//! (reserve_in + in) × (reserve_out − amount_out) ≥ reserve_in × reserve_out
//! ```

use crate::domain::{AccountId, Amount, AssetPair, Price, Reserves, SwapDirection, SwapExecuted};
use crate::error::AmmError;
use crate::traits::AssetLedger;

/// Swap execution and price/reserve queries.
///
/// # Implementors
///
/// - `ConstantProductPool` — `x · y = k` with a 0.3% input fee
pub trait SwapPool {
    /// Sells `amount_in` of the `direction`'s input asset for the output
    /// asset, paying out the full quote.
    ///
    /// The trade is all-or-nothing: `amount_in` is debited from `trader`
    /// through `ledger`, reserves are updated, and the output is credited
    /// back.  On any error the pool and the ledger are unchanged.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InvalidReserves`] if the pool is unbootstrapped.
    /// - [`AmmError::InsufficientOutput`] if the quote rounds to zero.
    /// - [`AmmError::InsufficientBalance`] / [`AmmError::Unauthorized`]
    ///   propagated from the ledger debit.
    /// - [`AmmError::Overflow`] if the input reserve would exceed `u128`.
    fn swap<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapExecuted, AmmError>;

    /// Returns the output a swap of `amount_in` would produce right now,
    /// without touching any state.
    ///
    /// # Errors
    ///
    /// Same as the pricing checks of [`swap`](Self::swap).
    fn preview_swap(&self, direction: SwapDirection, amount_in: Amount)
        -> Result<Amount, AmmError>;

    /// Returns the current spot price: units of asset B per unit of asset A,
    /// as a fixed-point value at the pool's price precision.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroReserve`] if the pool is unbootstrapped.
    /// - [`AmmError::Overflow`] if the scaled price exceeds `u128`.
    fn get_price(&self) -> Result<Price, AmmError>;

    /// Returns the current reserves.
    #[must_use]
    fn get_reserves(&self) -> Reserves;

    /// Returns the asset pair, in configuration order.
    #[must_use]
    fn pair(&self) -> &AssetPair;
}
