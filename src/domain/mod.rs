//! Fundamental domain value types of the pool ledger.
//!
//! Quantities, identities, prices, and the facts emitted by transitions.
//! All types are newtypes or plain records with validated constructors
//! where an invariant exists.

mod account_id;
mod amount;
mod asset_id;
mod asset_pair;
mod decimals;
mod events;
mod price;
mod reserves;
mod shares;
mod swap_direction;

pub use account_id::AccountId;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::AssetPair;
pub use decimals::Decimals;
pub use events::{LiquidityAdded, LiquidityRemoved, PoolEvent, SwapExecuted};
pub use price::Price;
pub use reserves::Reserves;
pub use shares::Shares;
pub use swap_direction::SwapDirection;
