//! Widened multiply-divide.
//!
//! # Convention
//!
//! Every division truncates toward zero, so swap output, shares minted and
//! assets withdrawn never leak value out of the pool.  The one quantity the
//! caller pays, the input required for a given output, adds one unit on top
//! of the truncated quotient in [`quote_amount_in`](super::quote_amount_in).

use ruint::aliases::U256;

use crate::error::AmmError;

/// Computes `floor(a × b / denominator)` with a 256-bit intermediate product.
///
/// The product of two `u128` values always fits in 256 bits, so the only
/// failure modes are a zero denominator and a quotient that does not fit
/// back into `u128`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `denominator` is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128::MAX`.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::math::mul_div;
///
/// // u128::MAX * 2 / 4 would overflow in 128 bits.
/// assert_eq!(mul_div(u128::MAX, 2, 4), Ok(u128::MAX / 2));
/// assert_eq!(mul_div(10, 1, 3), Ok(3));
/// ```
pub fn mul_div(a: u128, b: u128, denominator: u128) -> Result<u128, AmmError> {
    if denominator == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let product = U256::from(a) * U256::from(b);
    narrow(product / U256::from(denominator), "mul_div result exceeds u128")
}

/// Narrows a 256-bit intermediate back to `u128`.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] carrying `context` if `value` does not fit.
pub fn narrow(value: U256, context: &'static str) -> Result<u128, AmmError> {
    u128::try_from(value).map_err(|_| AmmError::Overflow(context))
}
