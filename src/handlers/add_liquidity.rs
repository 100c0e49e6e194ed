//! Add-liquidity handler.

use tracing::{debug, info, instrument, warn};

use crate::domain::{AddLiquidity, AddLiquidityOutcome, Amount, Claims, Coin, Transfer};
use crate::error::AmmError;
use crate::math::pricing::liquidity_mint;
use crate::store::{PoolStore, ReservePool};
use crate::traits::{Clock, Ledger};

use super::{ensure_funds, ensure_not_expired, non_zero};

/// Deposits paired assets into a pool and mints claims to the sender.
///
/// `deposit_amount` native units are always deposited exactly; the other
/// asset is taken at the pool's current ratio, with `deposit.amount` as
/// the most the sender will supply.
///
/// When the pool does not exist yet, was emptied by withdrawals, or no
/// claims are outstanding, there is no ratio to honor: the pool is seeded
/// with both deposits as given and the sender receives `deposit_amount`
/// claims.
///
/// # Errors
///
/// Checked in order, all before any mutation:
///
/// - [`AmmError::DeadlineExpired`] if the block time is after the deadline.
/// - [`AmmError::InvalidPair`] if `deposit` is the native asset.
/// - [`AmmError::InvalidQuantity`] if the native deposit is zero, the
///   seeding deposit of the other asset is zero, or the deposit is too
///   small to mint a single claim.
/// - [`AmmError::SlippageExceeded`] if the paired deposit the pool
///   requires exceeds `deposit.amount`.
/// - [`AmmError::InsufficientFunds`] if the sender lacks either asset.
#[instrument(
    skip_all,
    fields(
        sender = %request.sender(),
        denom = %request.deposit().denom(),
        native = %request.deposit_amount(),
    )
)]
pub fn add_liquidity<C, L>(
    store: &mut PoolStore,
    clock: &C,
    ledger: &L,
    request: &AddLiquidity,
) -> Result<AddLiquidityOutcome, AmmError>
where
    C: Clock + ?Sized,
    L: Ledger + ?Sized,
{
    let result = execute(store, clock, ledger, request);
    match &result {
        Ok(outcome) => info!(
            minted = %outcome.minted(),
            native = %outcome.native_deposited(),
            other = %outcome.other_deposited(),
            created = outcome.created_pool(),
            "liquidity added"
        ),
        Err(err) => warn!(%err, "add liquidity rejected"),
    }
    result
}

fn execute<C, L>(
    store: &mut PoolStore,
    clock: &C,
    ledger: &L,
    request: &AddLiquidity,
) -> Result<AddLiquidityOutcome, AmmError>
where
    C: Clock + ?Sized,
    L: Ledger + ?Sized,
{
    ensure_not_expired(clock, request.deadline())?;

    let deposit = request.deposit();
    let denom = deposit.denom();
    if store.is_native(denom) {
        return Err(AmmError::InvalidPair {
            input: denom.clone(),
            output: store.native_denom().clone(),
        });
    }
    let native_amount = request.deposit_amount();
    if native_amount.is_zero() {
        return Err(AmmError::InvalidQuantity("native deposit is zero"));
    }

    let current = store.pool(denom).ok().cloned();
    let seeding = match &current {
        None => true,
        Some(pool) => pool.is_empty() || store.total_claims().is_zero(),
    };

    let (minted, other_amount) = if seeding {
        if deposit.is_zero() {
            return Err(AmmError::InvalidQuantity("seeding deposit is zero"));
        }
        (Claims::from_amount(native_amount), deposit.amount().clone())
    } else {
        let pool = current.as_ref().ok_or(AmmError::Internal("pool vanished"))?;
        let (minted, required) = liquidity_mint(
            native_amount,
            pool.native_reserve(),
            pool.reserve(),
            store.total_claims(),
        )?;
        if minted.is_zero() {
            return Err(AmmError::InvalidQuantity("deposit too small to mint claims"));
        }
        if &required > deposit.amount() {
            return Err(AmmError::SlippageExceeded {
                limit: deposit.amount().clone(),
                actual: required,
            });
        }
        (minted, required)
    };

    let native_coin = Coin::new(store.native_denom().clone(), native_amount.clone());
    let other_coin = Coin::new(denom.clone(), other_amount);
    debug!(%minted, native = %native_coin, other = %other_coin, seeding, "deposit priced");

    ensure_funds(ledger, request.sender(), &native_coin)?;
    ensure_funds(ledger, request.sender(), &other_coin)?;

    let (native_reserve, reserve) = match &current {
        Some(pool) => (pool.native_reserve().clone(), pool.reserve().clone()),
        None => (Amount::zero(), Amount::zero()),
    };
    let updated = ReservePool::new(
        native_reserve + native_coin.amount().clone(),
        reserve + other_coin.amount().clone(),
    );
    store.put_pool(denom, updated)?;
    store.mint_claims(request.sender(), &minted);

    let transfers = vec![Transfer::into_escrow(
        request.sender().clone(),
        non_zero([native_coin.clone(), other_coin.clone()]),
    )];
    Ok(AddLiquidityOutcome::new(
        minted,
        native_coin,
        other_coin,
        seeding,
        transfers,
    ))
}
