//! Integer square root.

use ruint::aliases::U256;

use super::rounding::narrow;
use crate::error::AmmError;

/// Floor square root of a 256-bit value via Newton's method.
///
/// The iterate decreases monotonically from `ceil(n / 2)` and stops at
/// `floor(√n)`.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n.is_zero() {
        return U256::ZERO;
    }
    let one = U256::from(1u8);
    let mut x = n;
    let mut y = (n >> 1) + (n & one);
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x
}

/// `floor(√(a × b))`, the geometric mean of two `u128` values.
///
/// # Errors
///
/// Never fails for `u128` inputs (`√(u128::MAX²) = u128::MAX`); the
/// `Result` keeps the narrowing step explicit.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::math::geometric_mean;
///
/// assert_eq!(geometric_mean(100, 200), Ok(141));
/// ```
pub fn geometric_mean(a: u128, b: u128) -> Result<u128, AmmError> {
    let product = U256::from(a) * U256::from(b);
    narrow(isqrt(product), "geometric mean exceeds u128")
}
