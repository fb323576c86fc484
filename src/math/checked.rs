//! Checked arithmetic trait for the quantity newtypes.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning `checked_*` methods of
//! [`Amount`] and [`Shares`] into `Result`s carrying a step description, so
//! pool code can use `?` throughout.
//!
//! # Examples
//!
//! ```
//! use hydra_cpmm::domain::Amount;
//! use hydra_cpmm::error::AmmError;
//! use hydra_cpmm::math::CheckedArithmetic;
//!
//! let r = Amount::MAX.safe_add(&Amount::new(1), "reserve_a overflow");
//! assert_eq!(r, Err(AmmError::Overflow("reserve_a overflow")));
//! ```

use crate::domain::{Amount, Shares};
use crate::error::AmmError;

/// Fallible addition and subtraction that never wrap or saturate.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] carrying `context` on overflow.
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] carrying `context` on underflow.
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Underflow(context))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_add(other).ok_or(AmmError::Overflow(context))
    }

    #[inline]
    fn safe_sub(&self, other: &Self, context: &'static str) -> Result<Self, AmmError> {
        self.checked_sub(other).ok_or(AmmError::Underflow(context))
    }
}
