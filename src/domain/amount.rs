//! Raw asset quantity with checked arithmetic.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A raw asset quantity in the asset's smallest unit.
///
/// `Amount` never interprets decimals.  Arithmetic is checked and returns
/// `None` instead of wrapping; products that can exceed `u128` go through
/// [`math::mul_div`](crate::math::mul_div) in 256 bits.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Amount;
///
/// let a = Amount::new(100);
/// assert_eq!(a.checked_add(&Amount::new(20)), Some(Amount::new(120)));
/// assert_eq!(a.checked_sub(&Amount::new(101)), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Largest representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Wraps a raw `u128` quantity.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the raw quantity.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Amount> for u128 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
