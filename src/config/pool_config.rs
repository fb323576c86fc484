//! Configuration for a constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{AssetId, AssetPair, Decimals};
use crate::error::AmmError;

/// Immutable parameters of a pool.
///
/// - `pair` — the two traded assets; asset A is the base of quoted prices.
/// - `price_decimals` — fixed-point precision of [`Price`](crate::domain::Price);
///   defaults to 18 (`SCALE = 10^18`).
///
/// The fee is not configurable.  A pool built from this config starts
/// unbootstrapped; the first deposit sets its price.
///
/// Deserializable so deployment tooling can load it from a file:
///
/// ```
/// use hydra_cpmm::config::PoolConfig;
///
/// let json = format!(
///     r#"{{"pair": {{"asset_a": {:?}, "asset_b": {:?}}}}}"#,
///     [1u8; 32], [2u8; 32],
/// );
/// let cfg: PoolConfig = serde_json::from_str(&json).expect("valid config");
/// assert_eq!(cfg.price_decimals().get(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolConfig {
    pair: AssetPair,
    #[serde(default = "default_price_decimals")]
    price_decimals: Decimals,
}

const fn default_price_decimals() -> Decimals {
    Decimals::MAX
}

impl PoolConfig {
    /// Creates a configuration with an explicit price precision.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`validate`](Self::validate).
    pub fn new(pair: AssetPair, price_decimals: Decimals) -> Result<Self, AmmError> {
        let config = Self {
            pair,
            price_decimals,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration for `(asset_a, asset_b)` with 18-decimal prices.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if the assets are null or equal.
    pub fn for_assets(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        Self::new(AssetPair::new(asset_a, asset_b)?, default_price_decimals())
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the pair is degenerate.
    /// - [`AmmError::InvalidPrecision`] if the precision is out of range.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pair.asset_a() == self.pair.asset_b() {
            return Err(AmmError::InvalidConfiguration(
                "pool assets must be distinct",
            ));
        }
        Decimals::new(self.price_decimals.get())?;
        Ok(())
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the price precision.
    #[must_use]
    pub const fn price_decimals(&self) -> Decimals {
        self.price_decimals
    }
}
