//! Construction of a pool from its configuration.

use crate::error::AmmError;

/// Builds a value from a validated configuration.
///
/// Implementations must validate the configuration; a successfully built
/// pool is in a valid initial state.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for ConstantProductPool`
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] (or a more specific
    /// variant) if the configuration is invalid.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
