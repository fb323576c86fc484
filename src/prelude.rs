//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Decimals, LiquidityAdded, LiquidityRemoved, PoolEvent,
    Price, Reserves, Shares, SwapDirection, SwapExecuted,
};

pub use crate::traits::{AssetLedger, FromConfig, LiquidityPool, SwapPool};

pub use crate::math::{quote, quote_amount_in, CheckedArithmetic};

pub use crate::config::PoolConfig;

pub use crate::error::AmmError;

pub use crate::ledger::InMemoryLedger;

pub use crate::pools::{ConstantProductPool, PoolSnapshot, PoolState, SharedPool};
