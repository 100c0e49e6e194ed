//! Arithmetic for AMM calculations.
//!
//! This module provides [`div_round`] for explicitly rounded big-integer
//! division and the [`pricing`] engine built on top of it.

pub mod pricing;
mod rounding;

pub use pricing::{input_required, liquidity_mint, liquidity_redeem, output_from_input};
pub use rounding::div_round;
