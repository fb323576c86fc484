//! Core trait abstractions.
//!
//! - [`SwapPool`] — swaps and read-only price/reserve queries.
//! - [`LiquidityPool`] — share minting and burning on top of [`SwapPool`].
//! - [`AssetLedger`] — the external debit/credit collaborator.
//! - [`FromConfig`] — configuration-driven construction.

mod asset_ledger;
mod from_config;
mod liquidity_pool;
mod swap_pool;

pub use asset_ledger::AssetLedger;
pub use from_config::FromConfig;
pub use liquidity_pool::LiquidityPool;
pub use swap_pool::SwapPool;
