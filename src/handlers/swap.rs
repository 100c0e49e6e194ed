//! Swap handler.
//!
//! A swap between the native asset and another asset prices a single hop
//! through that asset's pool.  A swap between two non-native assets is
//! routed through the native asset: the first hop sells the input for
//! native units in the input's pool, the second sells those native units
//! in the output's pool.  Each hop charges the fee.
//!
//! Sell orders price hops front to back starting from the exact input;
//! buy orders price them back to front starting from the exact output.

use tracing::{debug, info, instrument, warn};

use crate::domain::{Amount, Coin, Denom, FeeParams, SwapOrder, SwapOutcome, Transfer};
use crate::error::AmmError;
use crate::math::pricing::{input_required, output_from_input};
use crate::store::{PoolStore, ReservePool};
use crate::traits::{Clock, Ledger};

use super::{ensure_funds, ensure_not_expired, non_zero};

/// One constant-product hop through the pool keyed by `pool`.
#[derive(Debug, Clone)]
struct Hop {
    pool: Denom,
    sells_native: bool,
}

impl Hop {
    /// Returns `(input_reserve, output_reserve)` for this hop.
    fn reserves<'a>(&self, pool: &'a ReservePool) -> (&'a Amount, &'a Amount) {
        if self.sells_native {
            (pool.native_reserve(), pool.reserve())
        } else {
            (pool.reserve(), pool.native_reserve())
        }
    }
}

#[derive(Debug, Clone)]
struct PricedHop {
    hop: Hop,
    amount_in: Amount,
    amount_out: Amount,
}

/// Executes a swap order against the store.
///
/// On success the store reflects the new reserves and the outcome carries
/// the two movements the ledger must apply: the sold coin from the sender
/// into escrow, then the bought coin from escrow to the sender.
///
/// # Errors
///
/// Checked in order, all before any mutation:
///
/// - [`AmmError::DeadlineExpired`] if the block time is after the deadline.
/// - [`AmmError::InvalidPair`] if both coins have the same denom.
/// - [`AmmError::PoolNotFound`] if a pool on the route does not exist.
/// - [`AmmError::InvalidQuantity`] if the exact side of the order is zero.
/// - [`AmmError::InvalidReserve`] / [`AmmError::InsufficientLiquidity`]
///   if a hop cannot be priced.
/// - [`AmmError::SlippageExceeded`] if the price is outside the bound.
/// - [`AmmError::InsufficientFunds`] if the sender cannot pay.
#[instrument(
    skip_all,
    fields(
        sender = %order.sender(),
        side = %order.side(),
        input = %order.input().denom(),
        output = %order.output().denom(),
    )
)]
pub fn swap<C, L>(
    store: &mut PoolStore,
    clock: &C,
    ledger: &L,
    fee: FeeParams,
    order: &SwapOrder,
) -> Result<SwapOutcome, AmmError>
where
    C: Clock + ?Sized,
    L: Ledger + ?Sized,
{
    let result = execute(store, clock, ledger, fee, order);
    match &result {
        Ok(outcome) => info!(sold = %outcome.sold(), bought = %outcome.bought(), "swap committed"),
        Err(err) => warn!(%err, "swap rejected"),
    }
    result
}

fn execute<C, L>(
    store: &mut PoolStore,
    clock: &C,
    ledger: &L,
    fee: FeeParams,
    order: &SwapOrder,
) -> Result<SwapOutcome, AmmError>
where
    C: Clock + ?Sized,
    L: Ledger + ?Sized,
{
    ensure_not_expired(clock, order.deadline())?;

    let input = order.input();
    let output = order.output();
    let hops = route(store, input.denom(), output.denom())?;

    let priced = if order.is_buy_order() {
        if output.is_zero() {
            return Err(AmmError::InvalidQuantity("buy amount is zero"));
        }
        let priced = price_buy(store, hops, output.amount(), fee)?;
        let required = &first(&priced)?.amount_in;
        if required > input.amount() {
            return Err(AmmError::SlippageExceeded {
                limit: input.amount().clone(),
                actual: required.clone(),
            });
        }
        priced
    } else {
        if input.is_zero() {
            return Err(AmmError::InvalidQuantity("sell amount is zero"));
        }
        let priced = price_sell(store, hops, input.amount(), fee)?;
        let received = &last(&priced)?.amount_out;
        if received < output.amount() {
            return Err(AmmError::SlippageExceeded {
                limit: output.amount().clone(),
                actual: received.clone(),
            });
        }
        priced
    };

    let sold = Coin::new(input.denom().clone(), first(&priced)?.amount_in.clone());
    let bought = Coin::new(output.denom().clone(), last(&priced)?.amount_out.clone());
    debug!(%sold, %bought, hops = priced.len(), "swap priced");

    ensure_funds(ledger, order.sender(), &sold)?;
    apply(store, &priced)?;

    let mut transfers = vec![Transfer::into_escrow(
        order.sender().clone(),
        vec![sold.clone()],
    )];
    let payout = non_zero([bought.clone()]);
    if !payout.is_empty() {
        transfers.push(Transfer::out_of_escrow(order.sender().clone(), payout));
    }
    Ok(SwapOutcome::new(sold, bought, transfers))
}

/// Resolves the pools a swap from `input` to `output` passes through.
fn route(store: &PoolStore, input: &Denom, output: &Denom) -> Result<Vec<Hop>, AmmError> {
    if input == output {
        return Err(AmmError::InvalidPair {
            input: input.clone(),
            output: output.clone(),
        });
    }
    let mut hops = Vec::with_capacity(2);
    if !store.is_native(input) {
        store.pool(input)?;
        hops.push(Hop {
            pool: input.clone(),
            sells_native: false,
        });
    }
    if !store.is_native(output) {
        store.pool(output)?;
        hops.push(Hop {
            pool: output.clone(),
            sells_native: true,
        });
    }
    Ok(hops)
}

fn price_sell(
    store: &PoolStore,
    hops: Vec<Hop>,
    amount: &Amount,
    fee: FeeParams,
) -> Result<Vec<PricedHop>, AmmError> {
    let mut priced = Vec::with_capacity(hops.len());
    let mut amount_in = amount.clone();
    for hop in hops {
        let (input_reserve, output_reserve) = hop.reserves(store.pool(&hop.pool)?);
        let amount_out = output_from_input(&amount_in, input_reserve, output_reserve, fee)?;
        priced.push(PricedHop {
            hop,
            amount_in,
            amount_out: amount_out.clone(),
        });
        amount_in = amount_out;
    }
    Ok(priced)
}

fn price_buy(
    store: &PoolStore,
    hops: Vec<Hop>,
    amount: &Amount,
    fee: FeeParams,
) -> Result<Vec<PricedHop>, AmmError> {
    let mut priced = Vec::with_capacity(hops.len());
    let mut amount_out = amount.clone();
    for hop in hops.into_iter().rev() {
        let (input_reserve, output_reserve) = hop.reserves(store.pool(&hop.pool)?);
        let amount_in = input_required(&amount_out, input_reserve, output_reserve, fee)?;
        priced.push(PricedHop {
            hop,
            amount_in: amount_in.clone(),
            amount_out,
        });
        amount_out = amount_in;
    }
    priced.reverse();
    Ok(priced)
}

fn first(priced: &[PricedHop]) -> Result<&PricedHop, AmmError> {
    priced.first().ok_or(AmmError::Internal("empty swap route"))
}

fn last(priced: &[PricedHop]) -> Result<&PricedHop, AmmError> {
    priced.last().ok_or(AmmError::Internal("empty swap route"))
}

/// Writes the post-swap reserves of every hop.
fn apply(store: &mut PoolStore, priced: &[PricedHop]) -> Result<(), AmmError> {
    let mut updates = Vec::with_capacity(priced.len());
    for step in priced {
        let (input_reserve, output_reserve) = step.hop.reserves(store.pool(&step.hop.pool)?);
        let new_in = input_reserve + &step.amount_in;
        let new_out = output_reserve
            .checked_sub(&step.amount_out)
            .ok_or(AmmError::Internal("swap output exceeds reserve"))?;
        let updated = if step.hop.sells_native {
            ReservePool::new(new_in, new_out)
        } else {
            ReservePool::new(new_out, new_in)
        };
        updates.push((step.hop.pool.clone(), updated));
    }
    for (denom, pool) in updates {
        store.put_pool(&denom, pool)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Account, Timestamp};
    use crate::handlers::fixtures::{addr, coin, denom, Balances, FixedClock};

    const NOW: Timestamp = Timestamp::from_secs(100);

    fn store() -> PoolStore {
        let mut s = PoolStore::new(denom("atom"));
        for d in ["btcx", "ethx"] {
            let pool = ReservePool::new(Amount::new(1_000), Amount::new(1_000));
            let Ok(()) = s.put_pool(&denom(d), pool) else {
                panic!("non-native pool");
            };
        }
        s
    }

    fn rich() -> Balances {
        let alice = addr("alice");
        Balances::default()
            .with(&alice, &denom("atom"), 1_000_000)
            .with(&alice, &denom("btcx"), 1_000_000)
            .with(&alice, &denom("ethx"), 1_000_000)
    }

    fn run(store: &mut PoolStore, order: &SwapOrder) -> Result<SwapOutcome, AmmError> {
        swap(store, &FixedClock(NOW), &rich(), FeeParams::DEFAULT, order)
    }

    fn sell(input: Coin, min_output: Coin) -> SwapOrder {
        SwapOrder::sell(addr("alice"), input, min_output, NOW)
    }

    fn buy(max_input: Coin, output: Coin) -> SwapOrder {
        SwapOrder::buy(addr("alice"), max_input, output, NOW)
    }

    fn reserves(s: &PoolStore, d: &str) -> (Amount, Amount) {
        let Ok(pool) = s.pool(&denom(d)) else {
            panic!("pool exists");
        };
        (pool.native_reserve().clone(), pool.reserve().clone())
    }

    // -- Sell ---------------------------------------------------------------

    #[test]
    fn sell_native_for_other() {
        let mut s = store();
        let Ok(outcome) = run(&mut s, &sell(coin("atom", 100), coin("btcx", 90))) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.sold(), &coin("atom", 100));
        assert_eq!(outcome.bought(), &coin("btcx", 90));
        assert_eq!(reserves(&s, "btcx"), (Amount::new(1_100), Amount::new(910)));
        // Untouched pool stays put.
        assert_eq!(reserves(&s, "ethx"), (Amount::new(1_000), Amount::new(1_000)));

        let transfers = outcome.transfers();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].from(), &Account::Holder(addr("alice")));
        assert!(transfers[0].to().is_escrow());
        assert_eq!(transfers[0].coins(), &[coin("atom", 100)]);
        assert!(transfers[1].from().is_escrow());
        assert_eq!(transfers[1].coins(), &[coin("btcx", 90)]);
    }

    #[test]
    fn sell_other_for_native() {
        let mut s = store();
        let Ok(outcome) = run(&mut s, &sell(coin("btcx", 100), coin("atom", 0))) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.bought(), &coin("atom", 90));
        assert_eq!(reserves(&s, "btcx"), (Amount::new(910), Amount::new(1_100)));
    }

    #[test]
    fn sell_below_minimum_is_slippage() {
        let mut s = store();
        let before = s.clone();
        assert_eq!(
            run(&mut s, &sell(coin("atom", 100), coin("btcx", 91))),
            Err(AmmError::SlippageExceeded {
                limit: Amount::new(91),
                actual: Amount::new(90),
            })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn sell_zero_is_rejected() {
        let mut s = store();
        assert!(matches!(
            run(&mut s, &sell(coin("atom", 0), coin("btcx", 0))),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    #[test]
    fn dust_sell_pays_nothing_out() {
        let mut s = store();
        let Ok(outcome) = run(&mut s, &sell(coin("atom", 1), coin("btcx", 0))) else {
            panic!("expected Ok");
        };
        assert!(outcome.bought().is_zero());
        assert_eq!(outcome.transfers().len(), 1);
        assert_eq!(reserves(&s, "btcx"), (Amount::new(1_001), Amount::new(1_000)));
    }

    // -- Buy ----------------------------------------------------------------

    #[test]
    fn buy_exact_output() {
        let mut s = store();
        let Ok(outcome) = run(&mut s, &buy(coin("atom", 100), coin("btcx", 90))) else {
            panic!("expected Ok");
        };
        assert_eq!(outcome.sold(), &coin("atom", 100));
        assert_eq!(outcome.bought(), &coin("btcx", 90));
        assert_eq!(reserves(&s, "btcx"), (Amount::new(1_100), Amount::new(910)));
    }

    #[test]
    fn buy_prices_against_output_reserve() {
        let mut s = PoolStore::new(denom("atom"));
        let Ok(()) = s.put_pool(
            &denom("btcx"),
            ReservePool::new(Amount::new(1_000), Amount::new(4_000)),
        ) else {
            panic!("non-native pool");
        };
        let Ok(outcome) = run(&mut s, &buy(coin("atom", 1_000), coin("btcx", 100))) else {
            panic!("expected Ok");
        };
        // ⌊1000·100·1000 / (3900·997)⌋ + 1
        assert_eq!(outcome.sold(), &coin("atom", 26));
    }

    #[test]
    fn buy_above_maximum_is_slippage() {
        let mut s = store();
        let before = s.clone();
        assert_eq!(
            run(&mut s, &buy(coin("atom", 99), coin("btcx", 90))),
            Err(AmmError::SlippageExceeded {
                limit: Amount::new(99),
                actual: Amount::new(100),
            })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn buy_whole_reserve_is_insufficient_liquidity() {
        let mut s = store();
        assert!(matches!(
            run(&mut s, &buy(coin("atom", u128::MAX), coin("btcx", 1_000))),
            Err(AmmError::InsufficientLiquidity { .. })
        ));
    }

    #[test]
    fn buy_zero_is_rejected() {
        let mut s = store();
        assert!(matches!(
            run(&mut s, &buy(coin("atom", 10), coin("btcx", 0))),
            Err(AmmError::InvalidQuantity(_))
        ));
    }

    // -- Routing ------------------------------------------------------------

    #[test]
    fn other_to_other_routes_through_native() {
        let mut s = store();
        let Ok(outcome) = run(&mut s, &sell(coin("btcx", 100), coin("ethx", 80))) else {
            panic!("expected Ok");
        };
        // 100 btcx -> 90 atom -> ⌊90·997·1000 / (1000·1000 + 90·997)⌋ = 82 ethx
        assert_eq!(outcome.bought(), &coin("ethx", 82));
        assert_eq!(reserves(&s, "btcx"), (Amount::new(910), Amount::new(1_100)));
        assert_eq!(reserves(&s, "ethx"), (Amount::new(1_090), Amount::new(918)));
    }

    #[test]
    fn routed_buy_matches_routed_sell() {
        let mut s = store();
        let Ok(outcome) = run(&mut s, &buy(coin("btcx", 1_000), coin("ethx", 82))) else {
            panic!("expected Ok");
        };
        assert!(outcome.sold().amount() <= &Amount::new(100));
        assert_eq!(outcome.bought(), &coin("ethx", 82));
    }

    #[test]
    fn same_denom_is_invalid_pair() {
        let mut s = store();
        assert!(matches!(
            run(&mut s, &sell(coin("btcx", 10), coin("btcx", 0))),
            Err(AmmError::InvalidPair { .. })
        ));
    }

    #[test]
    fn missing_pool() {
        let mut s = store();
        assert_eq!(
            run(&mut s, &sell(coin("atom", 10), coin("dogx", 0))),
            Err(AmmError::PoolNotFound(denom("dogx")))
        );
        assert_eq!(
            run(&mut s, &sell(coin("dogx", 10), coin("btcx", 0))),
            Err(AmmError::PoolNotFound(denom("dogx")))
        );
    }

    // -- Guards -------------------------------------------------------------

    #[test]
    fn expired_deadline() {
        let mut s = store();
        let before = s.clone();
        let order = SwapOrder::sell(
            addr("alice"),
            coin("atom", 100),
            coin("btcx", 0),
            Timestamp::from_secs(99),
        );
        assert_eq!(
            run(&mut s, &order),
            Err(AmmError::DeadlineExpired {
                deadline: Timestamp::from_secs(99),
                block_time: NOW,
            })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn deadline_equal_to_block_time_is_live() {
        let mut s = store();
        assert!(run(&mut s, &sell(coin("atom", 100), coin("btcx", 0))).is_ok());
    }

    #[test]
    fn insufficient_funds() {
        let mut s = store();
        let before = s.clone();
        let poor = Balances::default().with(&addr("alice"), &denom("atom"), 99);
        let result = swap(
            &mut s,
            &FixedClock(NOW),
            &poor,
            FeeParams::DEFAULT,
            &sell(coin("atom", 100), coin("btcx", 0)),
        );
        assert_eq!(
            result,
            Err(AmmError::InsufficientFunds {
                address: addr("alice"),
                required: coin("atom", 100),
            })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn buy_checks_funds_against_required_input() {
        // Buying 90 btcx from 1000/1000 costs exactly 100 atom; the cap is 1000.
        let order = buy(coin("atom", 1_000), coin("btcx", 90));

        let mut s = store();
        let exact = Balances::default().with(&addr("alice"), &denom("atom"), 100);
        let Ok(outcome) = swap(&mut s, &FixedClock(NOW), &exact, FeeParams::DEFAULT, &order) else {
            panic!("sender holds the required input");
        };
        assert_eq!(outcome.sold(), &coin("atom", 100));
        assert_eq!(outcome.bought(), &coin("btcx", 90));

        let mut s = store();
        let before = s.clone();
        let short = Balances::default().with(&addr("alice"), &denom("atom"), 99);
        assert_eq!(
            swap(&mut s, &FixedClock(NOW), &short, FeeParams::DEFAULT, &order),
            Err(AmmError::InsufficientFunds {
                address: addr("alice"),
                required: coin("atom", 100),
            })
        );
        assert_eq!(s, before);
    }

    #[test]
    fn product_never_decreases() {
        let mut s = store();
        let before = reserves(&s, "btcx");
        let Ok(_) = run(&mut s, &sell(coin("atom", 333), coin("btcx", 0))) else {
            panic!("expected Ok");
        };
        let after = reserves(&s, "btcx");
        assert!(&after.0 * &after.1 >= &before.0 * &before.1);
    }
}
