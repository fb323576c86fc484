//! Pool configuration.
//!
//! [`PoolConfig`] is the declarative blueprint a
//! [`ConstantProductPool`](crate::pools::ConstantProductPool) is built from
//! through [`FromConfig`](crate::traits::FromConfig).

mod pool_config;

pub use pool_config::PoolConfig;
