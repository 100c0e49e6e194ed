//! Operation handlers.
//!
//! Each handler validates a request against the current
//! [`PoolStore`](crate::store::PoolStore), prices it with the
//! [`pricing`](crate::math::pricing) engine, mutates the store, and
//! returns the ordered [`Transfer`](crate::domain::Transfer)s the ledger
//! must apply.
//!
//! Handlers are atomic with respect to the store: every check runs before
//! the first write, so a rejected request leaves the store untouched.
//! Applying the returned transfers (and undoing the store update if the
//! ledger refuses one) is the job of [`Exchange`](crate::exchange::Exchange).
//!
//! | Handler | Request | Outcome |
//! |---------|---------|---------|
//! | [`swap`] | [`SwapOrder`](crate::domain::SwapOrder) | [`SwapOutcome`](crate::domain::SwapOutcome) |
//! | [`add_liquidity`] | [`AddLiquidity`](crate::domain::AddLiquidity) | [`AddLiquidityOutcome`](crate::domain::AddLiquidityOutcome) |
//! | [`remove_liquidity`] | [`RemoveLiquidity`](crate::domain::RemoveLiquidity) | [`RemoveLiquidityOutcome`](crate::domain::RemoveLiquidityOutcome) |

mod add_liquidity;
mod remove_liquidity;
mod swap;

pub use add_liquidity::add_liquidity;
pub use remove_liquidity::remove_liquidity;
pub use swap::swap;

use crate::domain::{Address, Coin, Timestamp};
use crate::error::AmmError;
use crate::traits::{Clock, Ledger};

/// Rejects a request whose deadline lies before the current block time.
fn ensure_not_expired<C: Clock + ?Sized>(clock: &C, deadline: Timestamp) -> Result<(), AmmError> {
    let block_time = clock.block_time();
    if block_time.is_after(deadline) {
        return Err(AmmError::DeadlineExpired {
            deadline,
            block_time,
        });
    }
    Ok(())
}

/// Rejects a request whose sender cannot pay `coin`.
fn ensure_funds<L: Ledger + ?Sized>(
    ledger: &L,
    address: &Address,
    coin: &Coin,
) -> Result<(), AmmError> {
    if coin.is_zero() || ledger.has_balance(address, coin) {
        return Ok(());
    }
    Err(AmmError::InsufficientFunds {
        address: address.clone(),
        required: coin.clone(),
    })
}

/// Drops zero-amount coins from a movement.
fn non_zero(coins: impl IntoIterator<Item = Coin>) -> Vec<Coin> {
    coins.into_iter().filter(|c| !c.is_zero()).collect()
}
