//! In-memory multi-asset ledger with allowance-gated debits.

use std::collections::HashMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// Balances and pool allowances for any number of assets.
///
/// Every debit is a transfer from the owner to the `custody` account and
/// consumes the owner's allowance; every credit is a transfer out of
/// custody.  An allowance of [`Amount::MAX`] is unlimited and never
/// consumed.  The custody account itself can never be debited: its funds
/// are the pool's reserves.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{AccountId, Amount, AssetId};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::traits::AssetLedger;
///
/// let custody = AccountId::from_bytes([0xff; 32]);
/// let alice = AccountId::from_bytes([1; 32]);
/// let token = AssetId::from_bytes([7; 32]);
///
/// let mut ledger = InMemoryLedger::new(custody);
/// ledger.mint(token, alice, Amount::new(100)).expect("mint");
/// ledger.approve(token, alice, Amount::new(60));
///
/// ledger.debit(token, alice, Amount::new(50)).expect("debit");
/// assert_eq!(ledger.balance_of(token, alice), Amount::new(50));
/// assert_eq!(ledger.custody_balance(token), Amount::new(50));
/// assert_eq!(ledger.allowance(token, alice), Amount::new(10));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryLedger {
    custody: AccountId,
    balances: HashMap<(AssetId, AccountId), Amount>,
    allowances: HashMap<(AssetId, AccountId), Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger whose pool custody account is `custody`.
    #[must_use]
    pub fn new(custody: AccountId) -> Self {
        Self {
            custody,
            balances: HashMap::new(),
            allowances: HashMap::new(),
        }
    }

    /// Returns the custody account.
    #[must_use]
    pub const fn custody(&self) -> AccountId {
        self.custody
    }

    /// Issues `amount` of `asset` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would exceed `u128`.
    pub fn mint(&mut self, asset: AssetId, to: AccountId, amount: Amount) -> Result<(), AmmError> {
        let balance = self.balances.entry((asset, to)).or_default();
        *balance = balance.safe_add(&amount, "ledger balance overflow")?;
        Ok(())
    }

    /// Sets how much of `owner`'s `asset` the pool may debit.
    ///
    /// Replaces any previous allowance.
    pub fn approve(&mut self, asset: AssetId, owner: AccountId, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(asset, owner));
        } else {
            self.allowances.insert((asset, owner), amount);
        }
    }

    /// Returns `account`'s balance of `asset`.
    #[must_use]
    pub fn balance_of(&self, asset: AssetId, account: AccountId) -> Amount {
        self.balances
            .get(&(asset, account))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the remaining allowance `owner` granted the pool for `asset`.
    #[must_use]
    pub fn allowance(&self, asset: AssetId, owner: AccountId) -> Amount {
        self.allowances
            .get(&(asset, owner))
            .copied()
            .unwrap_or_default()
    }

    /// Returns the amount of `asset` held in pool custody.
    #[must_use]
    pub fn custody_balance(&self, asset: AssetId) -> Amount {
        self.balance_of(asset, self.custody)
    }
}

impl AssetLedger for InMemoryLedger {
    fn debit(&mut self, asset: AssetId, from: AccountId, amount: Amount) -> Result<(), AmmError> {
        if from == self.custody {
            tracing::warn!(%asset, %amount, "custody account cannot be debited");
            return Err(AmmError::Unauthorized);
        }
        let allowance = self.allowance(asset, from);
        if allowance < amount {
            return Err(AmmError::Unauthorized);
        }
        let balance = self.balance_of(asset, from);
        let remaining = balance
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance)?;
        let custody = self
            .custody_balance(asset)
            .safe_add(&amount, "custody balance overflow")?;

        // -- commit ---------------------------------------------------------
        if allowance != Amount::MAX {
            self.approve(asset, from, Amount::new(allowance.get() - amount.get()));
        }
        self.balances.insert((asset, from), remaining);
        self.balances.insert((asset, self.custody), custody);
        tracing::trace!(%asset, %from, %amount, "ledger debit");
        Ok(())
    }

    fn credit(&mut self, asset: AssetId, to: AccountId, amount: Amount) {
        let held = self.custody_balance(asset);
        if held < amount {
            tracing::warn!(%asset, %to, %amount, %held, "credit exceeds custody balance");
        }
        let custody = Amount::new(held.get().saturating_sub(amount.get()));
        self.balances.insert((asset, self.custody), custody);
        let balance = self.balances.entry((asset, to)).or_default();
        *balance = Amount::new(balance.get().saturating_add(amount.get()));
        tracing::trace!(%asset, %to, %amount, "ledger credit");
    }

    fn refund(&mut self, asset: AssetId, to: AccountId, amount: Amount) {
        self.credit(asset, to, amount);
        let allowance = self.allowance(asset, to);
        if allowance != Amount::MAX {
            self.approve(
                asset,
                to,
                Amount::new(allowance.get().saturating_add(amount.get())),
            );
        }
    }
}
