//! Remove-liquidity handler.

use tracing::{debug, error, info, instrument, warn};

use crate::domain::{Coin, RemoveLiquidity, RemoveLiquidityOutcome, Transfer};
use crate::error::AmmError;
use crate::math::pricing::liquidity_redeem;
use crate::store::{PoolStore, ReservePool};
use crate::traits::Clock;

use super::{ensure_not_expired, non_zero};

/// Burns the sender's claims and pays out their share of one pool.
///
/// The share of each reserve is `claims × reserve / total_claims`, rounded
/// down.  Burning the entire claim supply drains the pool exactly.
///
/// # Errors
///
/// Checked in order, all before any mutation:
///
/// - [`AmmError::DeadlineExpired`] if the block time is after the deadline.
/// - [`AmmError::PoolNotFound`] if no pool exists for `withdraw`.
/// - [`AmmError::NoLiquidity`] if no claims are outstanding.
/// - [`AmmError::InvalidQuantity`] if `withdraw_amount` is zero.
/// - [`AmmError::InsufficientClaims`] if the sender owns fewer claims.
/// - [`AmmError::Internal`] if the claim supply is smaller than the
///   sender's balance (fatal accounting drift).
#[instrument(
    skip_all,
    fields(
        sender = %request.sender(),
        denom = %request.withdraw(),
        claims = %request.withdraw_amount(),
    )
)]
pub fn remove_liquidity<C>(
    store: &mut PoolStore,
    clock: &C,
    request: &RemoveLiquidity,
) -> Result<RemoveLiquidityOutcome, AmmError>
where
    C: Clock + ?Sized,
{
    let result = execute(store, clock, request);
    match &result {
        Ok(outcome) => info!(
            burned = %outcome.burned(),
            native = %outcome.native_withdrawn(),
            other = %outcome.other_withdrawn(),
            "liquidity removed"
        ),
        Err(err) => warn!(%err, "remove liquidity rejected"),
    }
    result
}

fn execute<C>(
    store: &mut PoolStore,
    clock: &C,
    request: &RemoveLiquidity,
) -> Result<RemoveLiquidityOutcome, AmmError>
where
    C: Clock + ?Sized,
{
    ensure_not_expired(clock, request.deadline())?;

    let denom = request.withdraw();
    let pool = store.pool(denom)?.clone();
    let supply = store.total_claims().clone();
    if supply.is_zero() {
        return Err(AmmError::NoLiquidity);
    }

    let burned = request.withdraw_amount();
    if burned.is_zero() {
        return Err(AmmError::InvalidQuantity("withdraw amount is zero"));
    }
    let held = store.claims_of(request.sender());
    if &held < burned {
        return Err(AmmError::InsufficientClaims {
            held,
            requested: burned.clone(),
        });
    }
    if supply < held {
        error!(%supply, %held, "claim supply below holder balance");
        return Err(AmmError::Internal("claim supply below holder balance"));
    }

    let native_out = liquidity_redeem(burned, pool.native_reserve(), &supply)?;
    let other_out = liquidity_redeem(burned, pool.reserve(), &supply)?;
    let updated = ReservePool::new(
        pool.native_reserve()
            .checked_sub(&native_out)
            .ok_or(AmmError::Internal("redeemed more than the native reserve"))?,
        pool.reserve()
            .checked_sub(&other_out)
            .ok_or(AmmError::Internal("redeemed more than the reserve"))?,
    );

    let native_coin = Coin::new(store.native_denom().clone(), native_out);
    let other_coin = Coin::new(denom.clone(), other_out);
    debug!(native = %native_coin, other = %other_coin, "withdrawal priced");

    store.redeem(request.sender(), denom, burned, updated)?;

    let payout = non_zero([native_coin.clone(), other_coin.clone()]);
    let transfers = if payout.is_empty() {
        Vec::new()
    } else {
        vec![Transfer::out_of_escrow(request.sender().clone(), payout)]
    };
    Ok(RemoveLiquidityOutcome::new(
        burned.clone(),
        native_coin,
        other_coin,
        transfers,
    ))
}
