//! Unified error types for the pool ledger.
//!
//! Every fallible operation in the crate returns [`AmmError`].  A failed
//! operation never leaves a partial state change behind: the error is the
//! only observable effect.

use thiserror::Error;

/// Errors raised by pool transitions, quotes, and the asset-ledger
/// collaborator.
///
/// Variants carrying a `&'static str` name the arithmetic step or the
/// validation that failed, which keeps the enum `Copy`-cheap and allocation
/// free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum AmmError {
    /// A caller-supplied quantity that must be positive was zero.
    #[error("amount must be greater than zero")]
    InvalidAmount,

    /// A quote was requested against a zero reserve.
    #[error("quote requires both reserves to be non-zero")]
    InvalidReserves,

    /// A price query was made before the pool was bootstrapped.
    #[error("pool has no reserves")]
    ZeroReserve,

    /// A remove request exceeds the caller's share balance, or a requested
    /// output is not covered by the reserves.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The deposit is too small (or too imbalanced) to mint a single share.
    #[error("deposit mints zero shares")]
    InsufficientLiquidityMinted,

    /// Burning the requested shares would return zero of at least one asset.
    #[error("withdrawal rounds to zero")]
    InsufficientAmounts,

    /// The swap input is too small to produce any output.
    #[error("swap output rounds to zero")]
    InsufficientOutput,

    /// The asset ledger could not debit the account: balance too low.
    #[error("insufficient asset balance")]
    InsufficientBalance,

    /// The asset ledger refused the debit: the pool is not authorized to
    /// move that much of the account's funds.
    #[error("debit not authorized")]
    Unauthorized,

    /// An asset identifier is null, duplicated, or foreign to the pool.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// A configuration invariant does not hold.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A decimal precision is outside the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// Arithmetic overflowed the target width.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by a zero divisor.
    #[error("division by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let e = AmmError::Overflow("reserve_a overflow on add");
        assert_eq!(e.to_string(), "arithmetic overflow: reserve_a overflow on add");
    }

    #[test]
    fn unit_variants_display() {
        assert_eq!(AmmError::ZeroReserve.to_string(), "pool has no reserves");
        assert_eq!(
            AmmError::InvalidAmount.to_string(),
            "amount must be greater than zero"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<AmmError>();
    }
}
