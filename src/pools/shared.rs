//! Thread-safe pool handle.
//!
//! Mutating operations are serialized through one [`Mutex`] guarding both
//! the pool and its asset ledger, so each transition and its transfers are
//! a single critical section.  After every commit a fresh [`PoolSnapshot`]
//! is published through an [`ArcSwap`]; price and reserve readers load it
//! without touching the lock and never see a half-applied transition.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use arc_swap::ArcSwap;

use super::{ConstantProductPool, PoolSnapshot};
use crate::domain::{
    AccountId, Amount, LiquidityAdded, LiquidityRemoved, PoolEvent, Price, Reserves, Shares,
    SwapDirection, SwapExecuted,
};
use crate::error::AmmError;
use crate::traits::{AssetLedger, LiquidityPool, SwapPool};

type EventHook = Box<dyn Fn(&PoolEvent) + Send + Sync>;

struct Inner<L> {
    pool: ConstantProductPool,
    ledger: L,
}

/// A [`ConstantProductPool`] and its [`AssetLedger`] shareable across
/// threads.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
///
/// use hydra_cpmm::config::PoolConfig;
/// use hydra_cpmm::domain::{AccountId, Amount, AssetId};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::pools::{ConstantProductPool, SharedPool};
/// use hydra_cpmm::traits::FromConfig;
///
/// let (a, b) = (AssetId::from_bytes([1; 32]), AssetId::from_bytes([2; 32]));
/// let lp = AccountId::from_bytes([3; 32]);
///
/// let mut ledger = InMemoryLedger::new(AccountId::from_bytes([0xff; 32]));
/// for asset in [a, b] {
///     ledger.mint(asset, lp, Amount::new(1_000)).expect("mint");
///     ledger.approve(asset, lp, Amount::MAX);
/// }
/// let pool = ConstantProductPool::from_config(&PoolConfig::for_assets(a, b).expect("config"))
///     .expect("pool");
///
/// let shared = Arc::new(SharedPool::new(pool, ledger));
/// shared
///     .add_liquidity(lp, Amount::new(100), Amount::new(400))
///     .expect("bootstrap");
/// assert_eq!(shared.get_price().expect("priced").whole(), 4);
/// ```
pub struct SharedPool<L> {
    inner: Mutex<Inner<L>>,
    snapshot: ArcSwap<PoolSnapshot>,
    on_event: Option<EventHook>,
}

impl<L: AssetLedger> SharedPool<L> {
    /// Wraps `pool` and the `ledger` its assets live in.
    pub fn new(pool: ConstantProductPool, ledger: L) -> Self {
        let snapshot = ArcSwap::from_pointee(pool.snapshot());
        Self {
            inner: Mutex::new(Inner { pool, ledger }),
            snapshot,
            on_event: None,
        }
    }

    /// Registers a callback invoked with every committed event.
    ///
    /// The callback runs while the writer lock is held, so events arrive in
    /// commit order.  It must not call back into this pool.
    #[must_use]
    pub fn with_event_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&PoolEvent) + Send + Sync + 'static,
    {
        self.on_event = Some(Box::new(hook));
        self
    }

    /// See [`LiquidityPool::add_liquidity`].
    ///
    /// # Errors
    ///
    /// Propagates every error of the underlying transition.
    pub fn add_liquidity(
        &self,
        provider: AccountId,
        amount_a: Amount,
        amount_b: Amount,
    ) -> Result<LiquidityAdded, AmmError> {
        self.transact(|inner| {
            inner
                .pool
                .add_liquidity(&mut inner.ledger, provider, amount_a, amount_b)
        })
    }

    /// See [`LiquidityPool::remove_liquidity`].
    ///
    /// # Errors
    ///
    /// Propagates every error of the underlying transition.
    pub fn remove_liquidity(
        &self,
        provider: AccountId,
        shares: Shares,
    ) -> Result<LiquidityRemoved, AmmError> {
        self.transact(|inner| {
            inner
                .pool
                .remove_liquidity(&mut inner.ledger, provider, shares)
        })
    }

    /// See [`SwapPool::swap`].
    ///
    /// # Errors
    ///
    /// Propagates every error of the underlying transition.
    pub fn swap(
        &self,
        trader: AccountId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapExecuted, AmmError> {
        self.transact(|inner| {
            inner
                .pool
                .swap(&mut inner.ledger, trader, direction, amount_in)
        })
    }

    /// Returns the latest committed snapshot without locking.
    #[must_use]
    pub fn snapshot(&self) -> Arc<PoolSnapshot> {
        self.snapshot.load_full()
    }

    /// Reserves as of the latest commit, without locking.
    #[must_use]
    pub fn get_reserves(&self) -> Reserves {
        self.snapshot.load().get_reserves()
    }

    /// Spot price as of the latest commit, without locking.
    ///
    /// # Errors
    ///
    /// See [`PoolSnapshot::get_price`].
    pub fn get_price(&self) -> Result<Price, AmmError> {
        self.snapshot.load().get_price()
    }

    /// Returns `provider`'s share balance.  Takes the writer lock.
    #[must_use]
    pub fn shares_of(&self, provider: &AccountId) -> Shares {
        self.lock().pool.shares_of(provider)
    }

    /// Runs `f` with exclusive access to the ledger, serialized with every
    /// pool transition.
    pub fn with_ledger<R>(&self, f: impl FnOnce(&mut L) -> R) -> R {
        f(&mut self.lock().ledger)
    }

    /// Unwraps the pool and the ledger.
    pub fn into_inner(self) -> (ConstantProductPool, L) {
        let inner = self
            .inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        (inner.pool, inner.ledger)
    }

    // A panic inside a transition happens before its commit, so a poisoned
    // lock still guards consistent state.
    fn lock(&self) -> MutexGuard<'_, Inner<L>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn transact<T>(
        &self,
        op: impl FnOnce(&mut Inner<L>) -> Result<T, AmmError>,
    ) -> Result<T, AmmError>
    where
        T: Into<PoolEvent> + Copy,
    {
        let mut inner = self.lock();
        let event = op(&mut inner)?;
        self.snapshot.store(Arc::new(inner.pool.snapshot()));
        if let Some(hook) = &self.on_event {
            hook(&event.into());
        }
        Ok(event)
    }
}

impl<L> core::fmt::Debug for SharedPool<L> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedPool")
            .field("snapshot", &**self.snapshot.load())
            .field("on_event", &self.on_event.is_some())
            .finish_non_exhaustive()
    }
}
