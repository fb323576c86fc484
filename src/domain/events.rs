//! Facts emitted by successful pool transitions.
//!
//! Each mutating operation returns its fact as the return value; nothing is
//! emitted for a failed operation.  [`PoolEvent`] is the tagged union for
//! consumers that keep a single ordered stream.

use serde::{Deserialize, Serialize};

use super::{AccountId, Amount, AssetId, Shares};

/// A provider deposited both assets and received shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityAdded {
    /// Depositing account.
    pub provider: AccountId,
    /// Asset A deposited.
    pub amount_a: Amount,
    /// Asset B deposited.
    pub amount_b: Amount,
    /// Shares credited to `provider`.
    pub shares_minted: Shares,
}

/// A provider burned shares and received both assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LiquidityRemoved {
    /// Withdrawing account.
    pub provider: AccountId,
    /// Asset A paid out.
    pub amount_a: Amount,
    /// Asset B paid out.
    pub amount_b: Amount,
    /// Shares destroyed.
    pub shares_burned: Shares,
}

/// A trader exchanged one asset for the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SwapExecuted {
    /// Trading account.
    pub trader: AccountId,
    /// Asset sold to the pool.
    pub asset_in: AssetId,
    /// Asset bought from the pool.
    pub asset_out: AssetId,
    /// Quantity of `asset_in` debited.
    pub amount_in: Amount,
    /// Quantity of `asset_out` credited.
    pub amount_out: Amount,
}

/// Any fact a pool can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolEvent {
    /// See [`LiquidityAdded`].
    LiquidityAdded(LiquidityAdded),
    /// See [`LiquidityRemoved`].
    LiquidityRemoved(LiquidityRemoved),
    /// See [`SwapExecuted`].
    Swap(SwapExecuted),
}

impl PoolEvent {
    /// The account that triggered the transition.
    #[must_use]
    pub const fn actor(&self) -> AccountId {
        match self {
            Self::LiquidityAdded(e) => e.provider,
            Self::LiquidityRemoved(e) => e.provider,
            Self::Swap(e) => e.trader,
        }
    }
}

impl From<LiquidityAdded> for PoolEvent {
    fn from(e: LiquidityAdded) -> Self {
        Self::LiquidityAdded(e)
    }
}

impl From<LiquidityRemoved> for PoolEvent {
    fn from(e: LiquidityRemoved) -> Self {
        Self::LiquidityRemoved(e)
    }
}

impl From<SwapExecuted> for PoolEvent {
    fn from(e: SwapExecuted) -> Self {
        Self::Swap(e)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn alice() -> AccountId {
        AccountId::from_bytes([7; 32])
    }

    #[test]
    fn actor_of_each_kind() {
        let added = LiquidityAdded {
            provider: alice(),
            amount_a: Amount::new(100),
            amount_b: Amount::new(200),
            shares_minted: Shares::new(141),
        };
        let swap = SwapExecuted {
            trader: alice(),
            asset_in: AssetId::from_bytes([1; 32]),
            asset_out: AssetId::from_bytes([2; 32]),
            amount_in: Amount::new(10),
            amount_out: Amount::new(18),
        };
        assert_eq!(PoolEvent::from(added).actor(), alice());
        assert_eq!(PoolEvent::from(swap).actor(), alice());
    }

    #[test]
    fn tagged_serialization() {
        let removed = PoolEvent::from(LiquidityRemoved {
            provider: alice(),
            amount_a: Amount::new(1),
            amount_b: Amount::new(2),
            shares_burned: Shares::new(1),
        });
        let Ok(json) = serde_json::to_value(removed) else {
            panic!("serialize");
        };
        assert_eq!(json["kind"], "liquidity_removed");
        assert_eq!(json["shares_burned"], 1);
    }
}
