//! Fundamental domain value types used throughout the AMM core.
//!
//! This module contains the value types that model the reserve-pool
//! domain: denoms, amounts, claims, coins, addresses, fee parameters,
//! deadlines, requests, and the transfers and outcomes handlers return.
//! Types with invariants use newtypes with validated constructors.

mod address;
mod amount;
mod claims;
mod coin;
mod denom;
mod fee_params;
mod liquidity_request;
mod outcome;
mod rounding;
mod swap_order;
mod timestamp;
mod transfer;

pub use address::Address;
pub use amount::Amount;
pub use claims::Claims;
pub use coin::Coin;
pub use denom::Denom;
pub use fee_params::FeeParams;
pub use liquidity_request::{AddLiquidity, RemoveLiquidity};
pub use outcome::{AddLiquidityOutcome, RemoveLiquidityOutcome, SwapOutcome};
pub use rounding::Rounding;
pub use swap_order::{OrderSide, SwapOrder};
pub use timestamp::Timestamp;
pub use transfer::{Account, Transfer};
