//! Pool state.
//!
//! [`PoolStore`] holds every [`ReservePool`] together with the claim-token
//! accounting shared by all pools.

mod pool_store;
mod reserve_pool;

pub use pool_store::PoolStore;
pub use reserve_pool::ReservePool;
