//! Fixed-point spot price.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Decimals};
use crate::error::AmmError;
use crate::math::mul_div;

/// Units of B per unit of A, as an integer scaled by `10^decimals`.
///
/// `raw = reserve_b × 10^decimals / reserve_a`, truncated.  Equality is
/// exact on the raw integer, so two prices computed from reserves in the
/// same ratio compare equal.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, Decimals, Price};
///
/// let p = Price::from_reserves(Amount::new(100), Amount::new(200), Decimals::MAX)
///     .expect("non-zero reserve");
/// assert_eq!(p.raw(), 2_000_000_000_000_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Price {
    raw: u128,
    decimals: Decimals,
}

impl Price {
    /// Computes `reserve_b × 10^decimals / reserve_a` in 256-bit precision.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroReserve`] if `reserve_a` is zero.
    /// - [`AmmError::Overflow`] if the scaled price does not fit in `u128`.
    pub fn from_reserves(
        reserve_a: Amount,
        reserve_b: Amount,
        decimals: Decimals,
    ) -> Result<Self, AmmError> {
        if reserve_a.is_zero() {
            return Err(AmmError::ZeroReserve);
        }
        let raw = mul_div(reserve_b.get(), decimals.scale(), reserve_a.get())
            .map_err(|_| AmmError::Overflow("scaled price exceeds u128"))?;
        Ok(Self { raw, decimals })
    }

    /// Returns the scaled integer value.
    #[must_use]
    pub const fn raw(&self) -> u128 {
        self.raw
    }

    /// Returns the precision the price is scaled by.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns the integer part (whole units of B per unit of A).
    #[must_use]
    pub const fn whole(&self) -> u128 {
        self.raw / self.decimals.scale()
    }

    /// Returns the fractional part, in units of `10^-decimals`.
    #[must_use]
    pub const fn fraction(&self) -> u128 {
        self.raw % self.decimals.scale()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = usize::from(self.decimals.get());
        if width == 0 {
            return write!(f, "{}", self.whole());
        }
        write!(f, "{}.{:0width$}", self.whole(), self.fraction())
    }
}
