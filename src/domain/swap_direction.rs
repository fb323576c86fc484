//! Which way a swap trades through the pool.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Direction of a swap relative to the pool's `(A, B)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapDirection {
    /// Trader sells A and receives B.
    AToB,
    /// Trader sells B and receives A.
    BToA,
}

impl SwapDirection {
    /// Builds a direction from the "trader sells A" flag.
    #[must_use]
    pub const fn from_a(sells_a: bool) -> Self {
        if sells_a {
            Self::AToB
        } else {
            Self::BToA
        }
    }

    /// Returns `true` when asset A is the input.
    #[must_use]
    pub const fn sells_a(&self) -> bool {
        matches!(self, Self::AToB)
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_flag() {
        assert_eq!(SwapDirection::from_a(true), SwapDirection::AToB);
        assert_eq!(SwapDirection::from_a(false), SwapDirection::BToA);
        assert!(SwapDirection::AToB.sells_a());
    }

    #[test]
    fn reversal_is_involution() {
        for d in [SwapDirection::AToB, SwapDirection::BToA] {
            assert_eq!(d.reversed().reversed(), d);
            assert_ne!(d.reversed(), d);
        }
    }

    #[test]
    fn display() {
        assert_eq!(SwapDirection::BToA.to_string(), "B->A");
    }
}
