//! Pure constant-product pricing functions.
//!
//! The fee is a fixed 0.3% levied on the input side, expressed as the
//! ratio `997 / 1000`.  All divisions truncate toward zero except where the
//! caller is the one paying ([`quote_amount_in`]), so no rounding ever moves
//! value out of the pool.

use ruint::aliases::U256;

use super::rounding::{mul_div, narrow};
use crate::domain::Amount;
use crate::error::AmmError;

/// Input weight after the fee is taken.
pub const FEE_NUMERATOR: u128 = 997;

/// Fee denominator.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Output of a swap of `amount_in` against `(reserve_in, reserve_out)`.
///
/// ```text
/// amount_in_with_fee = amount_in × 997
/// amount_out = amount_in_with_fee × reserve_out
///            / (reserve_in × 1000 + amount_in_with_fee)
/// ```
///
/// This solves `(reserve_in + 0.997·amount_in) × (reserve_out − amount_out)
/// = reserve_in × reserve_out` for `amount_out`, truncated.  A result of zero
/// is returned as-is; rejecting it is the caller's decision.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if `amount_in × 997 × reserve_out` exceeds
///   256 bits.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Amount;
/// use hydra_cpmm::math::quote;
///
/// let out = quote(Amount::new(10), Amount::new(100), Amount::new(200));
/// assert_eq!(out, Ok(Amount::new(18)));
/// ```
pub fn quote(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }

    let amount_in_with_fee = U256::from(amount_in.get()) * U256::from(FEE_NUMERATOR);
    let numerator = amount_in_with_fee
        .checked_mul(U256::from(reserve_out.get()))
        .ok_or(AmmError::Overflow("quote numerator overflow"))?;
    let denominator = U256::from(reserve_in.get()) * U256::from(FEE_DENOMINATOR)
        + amount_in_with_fee;
    let amount_out = Amount::new(narrow(
        numerator / denominator,
        "quote output exceeds u128",
    )?);

    tracing::trace!(
        %amount_in,
        %reserve_in,
        %reserve_out,
        %amount_out,
        "constant-product quote"
    );
    Ok(amount_out)
}

/// Input that buys at least `amount_out`.
///
/// One unit above the exact bound, so the result is always sufficient even
/// when the bound is an integer.
///
/// ```text
/// amount_in = reserve_in × amount_out × 1000
///           / ((reserve_out − amount_out) × 997) + 1
/// ```
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `amount_out >= reserve_out`.
/// - [`AmmError::Overflow`] if the required input exceeds `u128`.
pub fn quote_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<Amount, AmmError> {
    if amount_out.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }

    let numerator = (U256::from(reserve_in.get()) * U256::from(amount_out.get()))
        .checked_mul(U256::from(FEE_DENOMINATOR))
        .ok_or(AmmError::Overflow("required input numerator overflow"))?;
    let denominator =
        U256::from(reserve_out.get() - amount_out.get()) * U256::from(FEE_NUMERATOR);
    let amount_in = narrow(
        numerator / denominator + U256::from(1u8),
        "required input exceeds u128",
    )?;
    Ok(Amount::new(amount_in))
}

/// The amount of the other asset that matches `amount` at the current ratio:
/// `floor(amount × reserve_other / reserve_this)`.
///
/// Depositors use it to pre-balance an add-liquidity call, since the unmatched
/// excess of an imbalanced deposit is absorbed by the pool without shares.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount` is zero.
/// - [`AmmError::InvalidReserves`] if either reserve is zero.
/// - [`AmmError::Overflow`] if the result exceeds `u128`.
pub fn proportional_amount(
    amount: Amount,
    reserve_this: Amount,
    reserve_other: Amount,
) -> Result<Amount, AmmError> {
    if amount.is_zero() {
        return Err(AmmError::InvalidAmount);
    }
    if reserve_this.is_zero() || reserve_other.is_zero() {
        return Err(AmmError::InvalidReserves);
    }
    mul_div(amount.get(), reserve_other.get(), reserve_this.get()).map(Amount::new)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn amt(v: u128) -> Amount {
        Amount::new(v)
    }

    #[rstest]
    #[case::reference_scenario(10, 100, 200, 18)]
    #[case::balanced_pool(1_000, 1_000_000, 2_000_000, 1_992)]
    #[case::tiny_input_rounds_to_zero(1, 1_000, 1_000, 0)]
    #[case::input_dwarfs_pool(1_000_000, 10, 10, 9)]
    fn quote_vectors(
        #[case] amount_in: u128,
        #[case] reserve_in: u128,
        #[case] reserve_out: u128,
        #[case] expected: u128,
    ) {
        assert_eq!(
            quote(amt(amount_in), amt(reserve_in), amt(reserve_out)),
            Ok(amt(expected))
        );
    }

    #[test]
    fn quote_rejects_zero_input() {
        assert_eq!(
            quote(Amount::ZERO, amt(1), amt(1)),
            Err(AmmError::InvalidAmount)
        );
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    #[case(0, 0)]
    fn quote_rejects_empty_reserves(#[case] reserve_in: u128, #[case] reserve_out: u128) {
        assert_eq!(
            quote(amt(5), amt(reserve_in), amt(reserve_out)),
            Err(AmmError::InvalidReserves)
        );
    }

    #[test]
    fn quote_never_drains_output_reserve() {
        let Ok(out) = quote(Amount::MAX, amt(1), amt(1_000)) else {
            panic!("wide math handles u128::MAX input");
        };
        assert!(out < amt(1_000));
    }

    #[test]
    fn quote_numerator_overflow_fails() {
        assert!(matches!(
            quote(Amount::MAX, amt(1), Amount::MAX),
            Err(AmmError::Overflow(_))
        ));
    }

    #[test]
    fn quote_preserves_invariant() {
        let (ri, ro, input) = (123_456u128, 789_012u128, 4_321u128);
        let Ok(out) = quote(amt(input), amt(ri), amt(ro)) else {
            panic!("valid quote");
        };
        let before = U256::from(ri) * U256::from(ro);
        let after = U256::from(ri + input) * U256::from(ro - out.get());
        assert!(after >= before);
    }

    #[test]
    fn amount_in_buys_requested_output() {
        let (ri, ro, want) = (amt(1_000_000), amt(2_000_000), amt(1_000));
        let Ok(needed) = quote_amount_in(want, ri, ro) else {
            panic!("valid inverse quote");
        };
        let Ok(got) = quote(needed, ri, ro) else {
            panic!("valid quote");
        };
        assert!(got >= want);
        let Some(one_less) = needed.checked_sub(&amt(1)) else {
            panic!("needed > 0");
        };
        let Ok(short) = quote(one_less, ri, ro) else {
            panic!("valid quote");
        };
        assert!(short < want);
    }

    #[test]
    fn amount_in_rejects_draining_output() {
        assert_eq!(
            quote_amount_in(amt(200), amt(100), amt(200)),
            Err(AmmError::InsufficientLiquidity)
        );
    }

    #[test]
    fn proportional_matches_ratio() {
        assert_eq!(
            proportional_amount(amt(50), amt(100), amt(200)),
            Ok(amt(100))
        );
        assert_eq!(
            proportional_amount(amt(1), amt(3), amt(2)),
            Ok(amt(0))
        );
        assert_eq!(
            proportional_amount(amt(1), Amount::ZERO, amt(2)),
            Err(AmmError::InvalidReserves)
        );
    }
}
