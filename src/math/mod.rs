//! Exact integer arithmetic for the pool.
//!
//! - [`CheckedArithmetic`] — `Result`-returning add/sub for quantities.
//! - [`mul_div`] — `floor(a × b / d)` through a 256-bit intermediate.
//! - [`geometric_mean`] / [`isqrt`] — bootstrap share minting.
//! - [`quote`], [`quote_amount_in`], [`proportional_amount`] — pure pricing
//!   functions; no state is touched.

mod checked;
mod quote;
mod rounding;
mod sqrt;

pub use checked::CheckedArithmetic;
pub use quote::{proportional_amount, quote, quote_amount_in, FEE_DENOMINATOR, FEE_NUMERATOR};
pub use rounding::{mul_div, narrow};
pub use sqrt::{geometric_mean, isqrt};
