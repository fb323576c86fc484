//! Chain-agnostic asset identifier.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a fungible asset tracked by the external asset ledger.
///
/// Wraps a 32-byte address.  The all-zero value is the *null* identifier
/// and is rejected wherever a real asset is required.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::AssetId;
///
/// let usdc = AssetId::from_bytes([1u8; 32]);
/// assert!(!usdc.is_null());
/// assert!(AssetId::NULL.is_null());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// The null identifier.
    pub const NULL: Self = Self([0u8; 32]);

    /// Creates an identifier from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns `true` for the all-zero identifier.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({self})")
    }
}

impl fmt::Display for AssetId {
    /// Hex-encodes the first four bytes, enough to tell assets apart in logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "..")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_detection() {
        assert!(AssetId::NULL.is_null());
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!AssetId::from_bytes(bytes).is_null());
    }

    #[test]
    fn display_is_short_hex() {
        let id = AssetId::from_bytes([0xab; 32]);
        assert_eq!(id.to_string(), "0xabababab..");
        assert_eq!(format!("{id:?}"), "AssetId(0xabababab..)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(AssetId::from_bytes([1u8; 32]) < AssetId::from_bytes([2u8; 32]));
    }
}
