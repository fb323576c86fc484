//! Constant Product pool ledger (Uniswap V2 style).
//!
//! The swap invariant is `x × y = k` where `x` and `y` are the reserves of
//! the two assets.  A fixed 0.3% fee is taken from the input side before the
//! curve is applied and stays in the pool, so `k` only grows across swaps.
//!
//! # Swap Algorithm (Asset A → Asset B)
//!
//! 1. `amount_in_with_fee = amount_in × 997`
//! 2. `amount_out = amount_in_with_fee × reserve_b / (reserve_a × 1000 + amount_in_with_fee)`
//! 3. `reserve_a += amount_in` (fee included)
//! 4. `reserve_b -= amount_out`
//!
//! # Share Minting
//!
//! - First deposit: `floor(sqrt(amount_a × amount_b))`.
//! - Later deposits: `min(amount_a × T / reserve_a, amount_b × T / reserve_b)`.
//!   The unmatched excess of an imbalanced deposit stays in the pool with
//!   no shares issued for it.
//!
//! # Atomicity
//!
//! Every transition computes its full outcome first, then debits the ledger,
//! then commits its state, then credits the ledger.  A failure at any step
//! before the commit leaves both the pool and the ledger untouched.

use std::collections::HashMap;

use ruint::aliases::U256;

use super::snapshot::{PoolSnapshot, PoolState};
use crate::config::PoolConfig;
use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Decimals, LiquidityAdded, LiquidityRemoved, Price,
    Reserves, Shares, SwapDirection, SwapExecuted,
};
use crate::error::AmmError;
use crate::math::{geometric_mean, mul_div, quote, CheckedArithmetic};
use crate::traits::{AssetLedger, FromConfig, LiquidityPool, SwapPool};

/// A two-asset Constant Product pool (`x · y = k`).
///
/// Created from a [`PoolConfig`] via [`FromConfig`] in the
/// [`Unbootstrapped`](PoolState::Unbootstrapped) state.  All asset
/// movements go through the [`AssetLedger`] passed to each transition.
///
/// # State
///
/// - `reserves` — current holdings of each asset, fees included
/// - `total_shares` — outstanding liquidity shares
/// - `share_balance` — shares per provider; only non-zero balances are kept
///
/// # Example
///
/// ```rust
/// use hydra_cpmm::config::PoolConfig;
/// use hydra_cpmm::domain::{AccountId, Amount, AssetId, Shares, SwapDirection};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::pools::ConstantProductPool;
/// use hydra_cpmm::traits::{FromConfig, LiquidityPool, SwapPool};
///
/// let (usd, eth) = (AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]));
/// let alice = AccountId::from_bytes([0xa1; 32]);
///
/// let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xff; 32]));
/// for asset in [usd, eth] {
///     ledger.mint(asset, alice, Amount::new(1_000)).expect("mint");
///     ledger.approve(asset, alice, Amount::MAX);
/// }
///
/// let cfg = PoolConfig::for_assets(usd, eth).expect("valid config");
/// let mut pool = ConstantProductPool::from_config(&cfg).expect("pool created");
///
/// let added = pool
///     .add_liquidity(&mut ledger, alice, Amount::new(100), Amount::new(200))
///     .expect("bootstrap");
/// assert_eq!(added.shares_minted, Shares::new(141));
///
/// let swap = pool
///     .swap(&mut ledger, alice, SwapDirection::AToB, Amount::new(10))
///     .expect("swap ok");
/// assert_eq!(swap.amount_out, Amount::new(18));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantProductPool {
    pair: AssetPair,
    price_decimals: Decimals,
    reserves: Reserves,
    total_shares: Shares,
    share_balance: HashMap<AccountId, Shares>,
}

impl ConstantProductPool {
    /// Returns the pool's macro-state.
    #[must_use]
    pub const fn state(&self) -> PoolState {
        PoolState::from_total_shares(self.total_shares)
    }

    /// Returns `true` while any shares are outstanding.
    #[must_use]
    pub const fn is_bootstrapped(&self) -> bool {
        !self.total_shares.is_zero()
    }

    /// Returns the reserve product `reserve_a × reserve_b`, exact in 256 bits.
    #[must_use]
    pub fn invariant(&self) -> U256 {
        self.reserves.product()
    }

    /// Returns the precision of [`get_price`](SwapPool::get_price).
    #[must_use]
    pub const fn price_decimals(&self) -> Decimals {
        self.price_decimals
    }

    /// Iterates over every provider with a non-zero share balance.
    pub fn providers(&self) -> impl Iterator<Item = (AccountId, Shares)> + '_ {
        self.share_balance.iter().map(|(id, shares)| (*id, *shares))
    }

    /// Captures the public state for lock-free readers.
    #[must_use]
    pub const fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot::new(
            self.pair,
            self.price_decimals,
            self.reserves,
            self.total_shares,
        )
    }

    /// Shares a deposit of `(amount_a, amount_b)` would mint right now.
    ///
    /// # Errors
    ///
    /// Same as the computation steps of
    /// [`add_liquidity`](LiquidityPool::add_liquidity): `InvalidAmount`,
    /// `InsufficientLiquidityMinted`, or `Overflow`.
    pub fn preview_add(&self, amount_a: Amount, amount_b: Amount) -> Result<Shares, AmmError> {
        if amount_a.is_zero() || amount_b.is_zero() {
            return Err(AmmError::InvalidAmount);
        }

        let minted = if self.total_shares.is_zero() {
            geometric_mean(amount_a.get(), amount_b.get())?
        } else {
            let total = self.total_shares.get();
            let by_a = mul_div(amount_a.get(), total, self.reserves.a.get())?;
            let by_b = mul_div(amount_b.get(), total, self.reserves.b.get())?;
            core::cmp::min(by_a, by_b)
        };

        if minted == 0 {
            return Err(AmmError::InsufficientLiquidityMinted);
        }

        // The deposit must also fit the reserves and the share supply.
        self.reserves
            .a
            .safe_add(&amount_a, "reserve_a overflow on add")?;
        self.reserves
            .b
            .safe_add(&amount_b, "reserve_b overflow on add")?;
        let minted = Shares::new(minted);
        self.total_shares
            .safe_add(&minted, "total shares overflow")?;
        Ok(minted)
    }

    /// Amounts burning `shares` would pay out right now.
    ///
    /// Does not check any provider's balance.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `shares` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `shares` exceeds the supply.
    /// - [`AmmError::InsufficientAmounts`] if either payout rounds to zero.
    pub fn preview_remove(&self, shares: Shares) -> Result<(Amount, Amount), AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        if shares > self.total_shares {
            return Err(AmmError::InsufficientLiquidity);
        }

        let total = self.total_shares.get();
        let amount_a = mul_div(shares.get(), self.reserves.a.get(), total)?;
        let amount_b = mul_div(shares.get(), self.reserves.b.get(), total)?;

        if amount_a == 0 || amount_b == 0 {
            return Err(AmmError::InsufficientAmounts);
        }
        Ok((Amount::new(amount_a), Amount::new(amount_b)))
    }

    /// Sells `amount_in` of asset A for asset B.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_a_for_b<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        amount_in: Amount,
    ) -> Result<SwapExecuted, AmmError> {
        self.swap(ledger, trader, SwapDirection::AToB, amount_in)
    }

    /// Sells `amount_in` of asset B for asset A.
    ///
    /// # Errors
    ///
    /// See [`SwapPool::swap`].
    pub fn swap_b_for_a<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        amount_in: Amount,
    ) -> Result<SwapExecuted, AmmError> {
        self.swap(ledger, trader, SwapDirection::BToA, amount_in)
    }

    /// Sells `amount_in` of `asset_in`, whichever side of the pair it is.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    /// - Everything [`SwapPool::swap`] returns.
    pub fn swap_from<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        asset_in: &AssetId,
        amount_in: Amount,
    ) -> Result<SwapExecuted, AmmError> {
        let direction = self.pair.direction_selling(asset_in)?;
        self.swap(ledger, trader, direction, amount_in)
    }
}

impl FromConfig<PoolConfig> for ConstantProductPool {
    /// Creates an unbootstrapped pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self, AmmError> {
        config.validate()?;
        Ok(Self {
            pair: *config.pair(),
            price_decimals: config.price_decimals(),
            reserves: Reserves::EMPTY,
            total_shares: Shares::ZERO,
            share_balance: HashMap::new(),
        })
    }
}

impl SwapPool for ConstantProductPool {
    fn swap<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        trader: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapExecuted, AmmError> {
        let amount_out = self.preview_swap(direction, amount_in)?;

        let (reserve_in, reserve_out) = self.reserves.oriented(direction);
        let new_in = reserve_in.safe_add(&amount_in, "reserve_in overflow after swap")?;
        let new_out = reserve_out.safe_sub(&amount_out, "reserve_out underflow after swap")?;
        let (asset_in, asset_out) = self.pair.assets_for(direction);

        if let Err(err) = ledger.debit(asset_in, trader, amount_in) {
            tracing::warn!(%trader, %direction, %amount_in, error = %err, "swap debit failed");
            return Err(err);
        }

        // -- commit -----------------------------------------------------------
        self.reserves = match direction {
            SwapDirection::AToB => Reserves::new(new_in, new_out),
            SwapDirection::BToA => Reserves::new(new_out, new_in),
        };
        ledger.credit(asset_out, trader, amount_out);

        tracing::debug!(
            %trader,
            %direction,
            %amount_in,
            %amount_out,
            reserve_a = %self.reserves.a,
            reserve_b = %self.reserves.b,
            "swap executed"
        );
        Ok(SwapExecuted {
            trader,
            asset_in,
            asset_out,
            amount_in,
            amount_out,
        })
    }

    fn preview_swap(
        &self,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<Amount, AmmError> {
        let (reserve_in, reserve_out) = self.reserves.oriented(direction);
        let amount_out = quote(amount_in, reserve_in, reserve_out)?;
        if amount_out.is_zero() {
            return Err(AmmError::InsufficientOutput);
        }
        Ok(amount_out)
    }

    fn get_price(&self) -> Result<Price, AmmError> {
        Price::from_reserves(self.reserves.a, self.reserves.b, self.price_decimals)
    }

    fn get_reserves(&self) -> Reserves {
        self.reserves
    }

    fn pair(&self) -> &AssetPair {
        &self.pair
    }
}

impl LiquidityPool for ConstantProductPool {
    fn add_liquidity<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityAdded, AmmError> {
        let minted = self.preview_add(amount_a, amount_b)?;

        let new_a = self.reserves.a.safe_add(&amount_a, "reserve_a overflow on add")?;
        let new_b = self.reserves.b.safe_add(&amount_b, "reserve_b overflow on add")?;
        let new_total = self
            .total_shares
            .safe_add(&minted, "total shares overflow")?;
        let new_balance = self
            .shares_of(&provider)
            .safe_add(&minted, "provider shares overflow")?;

        let (asset_a, asset_b) = (self.pair.asset_a(), self.pair.asset_b());
        if let Err(err) = ledger.debit(asset_a, provider, amount_a) {
            tracing::warn!(%provider, %amount_a, error = %err, "add liquidity debit of A failed");
            return Err(err);
        }
        if let Err(err) = ledger.debit(asset_b, provider, amount_b) {
            tracing::warn!(
                %provider,
                %amount_b,
                error = %err,
                "add liquidity debit of B failed, refunding A"
            );
            ledger.refund(asset_a, provider, amount_a);
            return Err(err);
        }

        // -- commit -----------------------------------------------------------
        let bootstrap = self.total_shares.is_zero();
        self.reserves = Reserves::new(new_a, new_b);
        self.total_shares = new_total;
        self.share_balance.insert(provider, new_balance);

        tracing::debug!(
            %provider,
            %amount_a,
            %amount_b,
            shares_minted = %minted,
            total_shares = %self.total_shares,
            bootstrap,
            "liquidity added"
        );
        Ok(LiquidityAdded {
            provider,
            amount_a,
            amount_b,
            shares_minted: minted,
        })
    }

    fn remove_liquidity<L: AssetLedger + ?Sized>(
        &mut self,
        ledger: &mut L,
        provider: AccountId,
        shares: Shares,
    ) -> Result<LiquidityRemoved, AmmError> {
        if shares.is_zero() {
            return Err(AmmError::InvalidAmount);
        }
        let held = self.shares_of(&provider);
        if held < shares {
            return Err(AmmError::InsufficientLiquidity);
        }
        let (amount_a, amount_b) = self.preview_remove(shares)?;

        let new_a = self.reserves.a.safe_sub(&amount_a, "reserve_a underflow on remove")?;
        let new_b = self.reserves.b.safe_sub(&amount_b, "reserve_b underflow on remove")?;
        let new_total = self
            .total_shares
            .safe_sub(&shares, "total shares underflow")?;
        let new_balance = held.safe_sub(&shares, "provider shares underflow")?;

        // -- commit -----------------------------------------------------------
        self.reserves = Reserves::new(new_a, new_b);
        self.total_shares = new_total;
        if new_balance.is_zero() {
            self.share_balance.remove(&provider);
        } else {
            self.share_balance.insert(provider, new_balance);
        }
        ledger.credit(self.pair.asset_a(), provider, amount_a);
        ledger.credit(self.pair.asset_b(), provider, amount_b);

        tracing::debug!(
            %provider,
            %amount_a,
            %amount_b,
            shares_burned = %shares,
            total_shares = %self.total_shares,
            "liquidity removed"
        );
        if self.total_shares.is_zero() {
            tracing::debug!("last share burned, pool unbootstrapped");
        }
        Ok(LiquidityRemoved {
            provider,
            amount_a,
            amount_b,
            shares_burned: shares,
        })
    }

    fn total_shares(&self) -> Shares {
        self.total_shares
    }

    fn shares_of(&self, provider: &AccountId) -> Shares {
        self.share_balance
            .get(provider)
            .copied()
            .unwrap_or_default()
    }
}
