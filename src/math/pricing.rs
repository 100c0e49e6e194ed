//! Constant-product pricing engine.
//!
//! Pure functions over reserve snapshots and fee parameters.  Nothing in
//! this module reads or writes a [`PoolStore`](crate::store::PoolStore);
//! handlers pass the reserves they looked up and apply the result.
//!
//! # Formulas
//!
//! With `fee = fee_n / fee_d` (the fraction of the input that is priced):
//!
//! | Function | Result |
//! |----------|--------|
//! | [`output_from_input`] | `⌊x·fee_n·R_out / (R_in·fee_d + x·fee_n)⌋` |
//! | [`input_required`] | `⌊R_in·y·fee_d / ((R_out − y)·fee_n)⌋ + 1` |
//! | [`liquidity_mint`] | `(⌊T·d / N⌋, ⌈R·d / N⌉)` |
//! | [`liquidity_redeem`] | `⌊c·R / T⌋` |
//!
//! Every division rounds in the pool's favor, so the product
//! `R_in · R_out` never decreases across a swap.
//!
//! # Examples
//!
//! ```
//! use unipool::domain::{Amount, FeeParams};
//! use unipool::math::pricing::{input_required, output_from_input};
//!
//! let reserve = Amount::new(1_000);
//! let out = output_from_input(&Amount::new(100), &reserve, &reserve, FeeParams::DEFAULT);
//! assert_eq!(out.ok(), Some(Amount::new(90)));
//!
//! let needed = input_required(&Amount::new(90), &reserve, &reserve, FeeParams::DEFAULT);
//! assert_eq!(needed.ok(), Some(Amount::new(100)));
//! ```

use crate::domain::{Amount, Claims, FeeParams, Rounding};
use crate::error::AmmError;

use super::div_round;

fn ensure_reserves(input_reserve: &Amount, output_reserve: &Amount) -> Result<(), AmmError> {
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(AmmError::InvalidReserve);
    }
    Ok(())
}

/// Computes the output received for selling exactly `input_amount`.
///
/// A zero input yields a zero output.
///
/// # Errors
///
/// - [`AmmError::InvalidReserve`] if either reserve is zero.
/// - [`AmmError::DivisionByZero`] if the fee denominator is zero.
pub fn output_from_input(
    input_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeParams,
) -> Result<Amount, AmmError> {
    ensure_reserves(input_reserve, output_reserve)?;

    let with_fee = input_amount.as_biguint() * fee.numerator();
    let numerator = &with_fee * output_reserve.as_biguint();
    let denominator = input_reserve.as_biguint() * fee.denominator() + with_fee;

    div_round(&numerator, &denominator, Rounding::for_payout()).map(Amount::from)
}

/// Computes the input that must be sold to receive exactly `output_amount`,
/// fee included.
///
/// The trailing `+ 1` keeps the quote strictly in the pool's favor, so
/// even a zero `output_amount` costs one unit.
///
/// # Errors
///
/// - [`AmmError::InvalidReserve`] if either reserve is zero.
/// - [`AmmError::InsufficientLiquidity`] if `output_amount ≥ output_reserve`.
/// - [`AmmError::DivisionByZero`] if `fee_n` is zero.
pub fn input_required(
    output_amount: &Amount,
    input_reserve: &Amount,
    output_reserve: &Amount,
    fee: FeeParams,
) -> Result<Amount, AmmError> {
    ensure_reserves(input_reserve, output_reserve)?;

    let remaining = match output_reserve.checked_sub(output_amount) {
        Some(r) if !r.is_zero() => r,
        _ => {
            return Err(AmmError::InsufficientLiquidity {
                requested: output_amount.clone(),
                reserve: output_reserve.clone(),
            });
        }
    };

    let numerator = input_reserve.as_biguint() * output_amount.as_biguint() * fee.denominator();
    let denominator = remaining.into_biguint() * fee.numerator();

    let quotient = div_round(&numerator, &denominator, Rounding::Down)?;
    Ok(Amount::from(quotient + 1u32))
}

/// Computes the claims minted and the paired deposit required for a
/// proportional deposit of `deposit_amount` native units.
///
/// Returns `(minted, paired)` where `minted` is rounded down and `paired`
/// (the other asset the depositor must supply) is rounded up.  The first
/// deposit into an empty pool has no ratio to preserve and is handled by
/// the add-liquidity handler instead.
///
/// # Errors
///
/// Returns [`AmmError::InvalidReserve`] if `native_reserve` is zero.
pub fn liquidity_mint(
    deposit_amount: &Amount,
    native_reserve: &Amount,
    other_reserve: &Amount,
    total_claims: &Claims,
) -> Result<(Claims, Amount), AmmError> {
    if native_reserve.is_zero() {
        return Err(AmmError::InvalidReserve);
    }
    let deposit = deposit_amount.as_biguint();
    let native = native_reserve.as_biguint();

    let minted = div_round(
        &(total_claims.as_biguint() * deposit),
        native,
        Rounding::for_payout(),
    )?;
    let paired = div_round(
        &(other_reserve.as_biguint() * deposit),
        native,
        Rounding::for_payment(),
    )?;

    Ok((Claims::from(minted), Amount::from(paired)))
}

/// Computes the share of `reserve` redeemed by burning `claims_burned`.
///
/// # Errors
///
/// Returns [`AmmError::NoLiquidity`] if `total_claims` is zero.
pub fn liquidity_redeem(
    claims_burned: &Claims,
    reserve: &Amount,
    total_claims: &Claims,
) -> Result<Amount, AmmError> {
    if total_claims.is_zero() {
        return Err(AmmError::NoLiquidity);
    }
    div_round(
        &(claims_burned.as_biguint() * reserve.as_biguint()),
        total_claims.as_biguint(),
        Rounding::for_payout(),
    )
    .map(Amount::from)
}
