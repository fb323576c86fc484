//! Asset ledger implementations.
//!
//! The pool talks to asset custody only through
//! [`AssetLedger`](crate::traits::AssetLedger).  [`InMemoryLedger`] is a
//! self-contained implementation suitable for tests, simulations, and demos.

mod in_memory;

pub use in_memory::InMemoryLedger;
