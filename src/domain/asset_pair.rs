//! The two assets a pool trades.

use serde::{Deserialize, Serialize};

use super::{AssetId, SwapDirection};
use crate::error::AmmError;

/// The immutable `(asset_a, asset_b)` pair of a pool.
///
/// Unlike a routing key, the pair keeps the caller's order: `asset_a` is the
/// base of [`Price`](super::Price) (units of B per unit of A), so swapping the
/// arguments describes a different quote convention.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(a, b).expect("distinct, non-null");
/// assert_eq!(pair.asset_a(), a);
/// assert!(AssetPair::new(a, a).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AssetPair {
    asset_a: AssetId,
    asset_b: AssetId,
}

impl AssetPair {
    /// Creates a pair after checking both identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if either identifier is null or
    /// both are the same asset.
    pub fn new(asset_a: AssetId, asset_b: AssetId) -> Result<Self, AmmError> {
        if asset_a.is_null() || asset_b.is_null() {
            return Err(AmmError::InvalidAsset("asset identifier must not be null"));
        }
        if asset_a == asset_b {
            return Err(AmmError::InvalidAsset("pair requires two distinct assets"));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns asset A.
    #[must_use]
    pub const fn asset_a(&self) -> AssetId {
        self.asset_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn asset_b(&self) -> AssetId {
        self.asset_b
    }

    /// Returns `true` if `asset` is one of the two pool assets.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.asset_a == *asset || self.asset_b == *asset
    }

    /// Returns `(asset_in, asset_out)` for a swap in `direction`.
    #[must_use]
    pub const fn assets_for(&self, direction: SwapDirection) -> (AssetId, AssetId) {
        match direction {
            SwapDirection::AToB => (self.asset_a, self.asset_b),
            SwapDirection::BToA => (self.asset_b, self.asset_a),
        }
    }

    /// Resolves the swap direction for selling `asset_in`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `asset_in` is not in the pair.
    pub fn direction_selling(&self, asset_in: &AssetId) -> Result<SwapDirection, AmmError> {
        if *asset_in == self.asset_a {
            Ok(SwapDirection::AToB)
        } else if *asset_in == self.asset_b {
            Ok(SwapDirection::BToA)
        } else {
            Err(AmmError::InvalidAsset("asset is not part of this pool"))
        }
    }
}

// Deserialization goes through `new` so a config file cannot smuggle in a
// degenerate pair.
impl<'de> Deserialize<'de> for AssetPair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            asset_a: AssetId,
            asset_b: AssetId,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.asset_a, raw.asset_b).map_err(serde::de::Error::custom)
    }
}
