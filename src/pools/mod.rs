//! Pool implementations.
//!
//! | Type | Use |
//! |------|-----|
//! | [`ConstantProductPool`] | The pool ledger; owned value mutated through `&mut self` |
//! | [`SharedPool`] | Thread-safe handle: serialized writers, lock-free snapshot readers |
//! | [`PoolSnapshot`] | Immutable copy of the public state |

pub mod constant_product;
mod shared;
mod snapshot;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::ConstantProductPool;
pub use shared::SharedPool;
pub use snapshot::{PoolSnapshot, PoolState};
