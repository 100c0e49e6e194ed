//! AMM configuration.
//!
//! This module contains [`AmmConfig`], the declarative blueprint an
//! [`Exchange`](crate::exchange::Exchange) and its
//! [`PoolStore`](crate::store::PoolStore) are built from.

mod amm_config;

pub use amm_config::{AmmConfig, DEFAULT_NATIVE_DENOM};
