//! Immutable point-in-time view of a pool.

use core::fmt;

use ruint::aliases::U256;
use serde::{Deserialize, Serialize};

use crate::domain::{AssetPair, Decimals, Price, Reserves, Shares};
use crate::error::AmmError;

/// The two macro-states of a pool.
///
/// The only way out of `Unbootstrapped` is a successful first deposit; the
/// only way back is burning the last outstanding share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolState {
    /// No shares outstanding and both reserves zero.
    Unbootstrapped,
    /// Shares outstanding and both reserves positive.
    Bootstrapped,
}

impl PoolState {
    /// Derives the state from the outstanding share supply.
    #[must_use]
    pub const fn from_total_shares(total: Shares) -> Self {
        if total.is_zero() {
            Self::Unbootstrapped
        } else {
            Self::Bootstrapped
        }
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbootstrapped => write!(f, "unbootstrapped"),
            Self::Bootstrapped => write!(f, "bootstrapped"),
        }
    }
}

/// A consistent copy of the pool's public state.
///
/// Taken after a transition commits, so it never shows a half-applied
/// update.  Prices are derived from the captured reserves on every call.
///
/// Serializes for publishing but has no `Deserialize`: the only way to get
/// one is from a pool, so reserves and supply are always consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PoolSnapshot {
    pair: AssetPair,
    price_decimals: Decimals,
    reserves: Reserves,
    total_shares: Shares,
}

impl PoolSnapshot {
    pub(crate) const fn new(
        pair: AssetPair,
        price_decimals: Decimals,
        reserves: Reserves,
        total_shares: Shares,
    ) -> Self {
        Self {
            pair,
            price_decimals,
            reserves,
            total_shares,
        }
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the captured reserves.
    #[must_use]
    pub const fn get_reserves(&self) -> Reserves {
        self.reserves
    }

    /// Returns the captured share supply.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// Returns the macro-state at capture time.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        PoolState::from_total_shares(self.total_shares)
    }

    /// Returns the reserve product at capture time.
    #[must_use]
    pub fn invariant(&self) -> U256 {
        self.reserves.product()
    }

    /// Spot price at capture time; see
    /// [`SwapPool::get_price`](crate::traits::SwapPool::get_price).
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroReserve`] if the pool was unbootstrapped.
    /// - [`AmmError::Overflow`] if the scaled price exceeds `u128`.
    pub fn get_price(&self) -> Result<Price, AmmError> {
        Price::from_reserves(self.reserves.a, self.reserves.b, self.price_decimals)
    }
}
