//! # Hydra CPMM
//!
//! A two-asset constant-product pool ledger: liquidity provisioning,
//! liquidity withdrawal, and swaps in either direction under the
//! `reserve_a × reserve_b = k` invariant with a fixed 0.3% input fee.
//!
//! All arithmetic is integer-only and checked.  Products that can exceed
//! 128 bits are computed in 256 bits and narrowed back, failing with
//! [`AmmError::Overflow`](error::AmmError::Overflow) instead of wrapping.
//! Every transition is all-or-nothing: on error neither the pool nor the
//! asset ledger changes.
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//!
//! // 1. Two assets and a ledger holding the provider's funds
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let lp = AccountId::from_bytes([0x11; 32]);
//! let trader = AccountId::from_bytes([0x22; 32]);
//!
//! let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xff; 32]));
//! for who in [lp, trader] {
//!     for asset in [usdc, weth] {
//!         ledger.mint(asset, who, Amount::new(1_000_000)).expect("mint");
//!         ledger.approve(asset, who, Amount::MAX);
//!     }
//! }
//!
//! // 2. An unbootstrapped pool from its configuration
//! let config = PoolConfig::for_assets(usdc, weth).expect("valid config");
//! let mut pool = ConstantProductPool::from_config(&config).expect("pool created");
//!
//! // 3. Bootstrap: the first deposit sets the price
//! let added = pool
//!     .add_liquidity(&mut ledger, lp, Amount::new(100), Amount::new(200))
//!     .expect("bootstrap");
//! assert_eq!(added.shares_minted, Shares::new(141));
//!
//! // 4. Sell 10 A for B
//! let swap = pool
//!     .swap(&mut ledger, trader, SwapDirection::AToB, Amount::new(10))
//!     .expect("swap succeeded");
//! assert_eq!(swap.amount_out, Amount::new(18));
//! assert_eq!(pool.get_reserves(), Reserves::new(Amount::new(110), Amount::new(182)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  PoolConfig + FromConfig, or SharedPool across threads
//! └──────┬──────┘
//!        │ add_liquidity / remove_liquidity / swap
//!        ▼
//! ┌─────────────┐
//! │    Pools     │  ConstantProductPool: compute → debit → commit → credit
//! └──────┬──────┘
//!        │ AssetLedger::debit / credit / refund
//!        ▼
//! ┌─────────────┐
//! │   Ledger     │  external asset custody (InMemoryLedger reference impl)
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Price`](domain::Price), event facts |
//! | [`traits`] | [`SwapPool`](traits::SwapPool), [`LiquidityPool`](traits::LiquidityPool), [`AssetLedger`](traits::AssetLedger), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) |
//! | [`pools`]  | [`ConstantProductPool`](pools::ConstantProductPool), [`SharedPool`](pools::SharedPool) |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) |
//! | [`math`]   | Checked and 256-bit arithmetic, quote functions |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |
//!
//! # Logging
//!
//! Transitions are logged through `tracing`: `debug` on commit, `warn` when
//! a ledger debit fails and the transition is rolled back, `trace` for
//! quotes.  The library never installs a subscriber.

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pools;
pub mod prelude;
pub mod traits;
