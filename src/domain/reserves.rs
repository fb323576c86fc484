//! Snapshot of the pool's holdings.

use ruint::aliases::U256;
use serde::{Deserialize, Serialize};

use super::{Amount, SwapDirection};

/// The pool's current `(reserve_a, reserve_b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Reserves {
    /// Holdings of asset A.
    pub a: Amount,
    /// Holdings of asset B.
    pub b: Amount,
}

impl Reserves {
    /// Empty reserves of an unbootstrapped pool.
    pub const EMPTY: Self = Self {
        a: Amount::ZERO,
        b: Amount::ZERO,
    };

    /// Creates a reserve pair.
    pub const fn new(a: Amount, b: Amount) -> Self {
        Self { a, b }
    }

    /// Returns `true` when both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.a.is_zero() && self.b.is_zero()
    }

    /// The constant-product invariant `a × b`, exact in 256 bits.
    #[must_use]
    pub fn product(&self) -> U256 {
        U256::from(self.a.get()) * U256::from(self.b.get())
    }

    /// Orients the reserves as `(reserve_in, reserve_out)` for a swap.
    #[must_use]
    pub const fn oriented(&self, direction: SwapDirection) -> (Amount, Amount) {
        match direction {
            SwapDirection::AToB => (self.a, self.b),
            SwapDirection::BToA => (self.b, self.a),
        }
    }
}

impl From<Reserves> for (Amount, Amount) {
    fn from(r: Reserves) -> Self {
        (r.a, r.b)
    }
}
