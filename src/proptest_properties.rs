//! Property-based tests using `proptest` for AMM invariant validation.
//!
//! Covers six properties:
//!
//! 1. **Invariant preservation**: a swap never decreases `R_in × R_out`.
//! 2. **Quote consistency**: `input_required(output_from_input(x)) ≤ x`.
//! 3. **Output monotonicity**: more input never yields less output.
//! 4. **No full drain**: no input can buy the whole output reserve.
//! 5. **Liquidity conservation**: add then remove returns each asset
//!    within one unit and restores the claim supply.
//! 6. **Exact drain on full burn**: burning every claim empties the pool.

use proptest::prelude::*;

use crate::domain::{
    AddLiquidity, Amount, Claims, FeeParams, RemoveLiquidity, SwapOrder, Timestamp,
};
use crate::error::AmmError;
use crate::handlers::fixtures::{addr, coin, denom, Balances, FixedClock};
use crate::handlers::{add_liquidity, remove_liquidity, swap};
use crate::math::pricing::{input_required, output_from_input};
use crate::store::{PoolStore, ReservePool};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const NOW: Timestamp = Timestamp::from_secs(1_000);

fn fee() -> FeeParams {
    FeeParams::DEFAULT
}

fn rich() -> Balances {
    let whale = u128::MAX / 4;
    Balances::default()
        .with(&addr("alice"), &denom("atom"), whale)
        .with(&addr("alice"), &denom("btcx"), whale)
        .with(&addr("bob"), &denom("atom"), whale)
        .with(&addr("bob"), &denom("btcx"), whale)
}

/// Store with an atom/btcx pool seeded by alice.
fn seeded(native: u128, other: u128) -> PoolStore {
    let mut store = PoolStore::new(denom("atom"));
    let req = AddLiquidity::new(addr("alice"), coin("btcx", other), Amount::new(native), NOW);
    let Ok(_) = add_liquidity(&mut store, &FixedClock(NOW), &rich(), &req) else {
        panic!("seed deposit");
    };
    store
}

fn reserves(store: &PoolStore) -> ReservePool {
    let Ok(pool) = store.pool(&denom("btcx")) else {
        panic!("pool exists");
    };
    pool.clone()
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 10_000_000] to avoid extremes.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Swap sizes up to twice a reserve.
fn trade_strategy() -> impl Strategy<Value = u128> {
    1u128..=20_000_000u128
}

/// Valid fee pairs from 0% to 10%.
fn fee_strategy() -> impl Strategy<Value = FeeParams> {
    (900u64..=1_000u64).prop_map(|n| {
        let Ok(fee) = FeeParams::new(n, 1_000) else {
            panic!("valid fee");
        };
        fee
    })
}

// ---------------------------------------------------------------------------
// Property 1: Invariant Preservation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_swap_never_decreases_product(
        native in reserve_strategy(),
        other in reserve_strategy(),
        amount in trade_strategy(),
        sell_native in any::<bool>(),
        buy in any::<bool>(),
    ) {
        let mut store = seeded(native, other);
        let k_before = reserves(&store).invariant();

        let (input, output) = if sell_native { ("atom", "btcx") } else { ("btcx", "atom") };
        let order = if buy {
            SwapOrder::buy(addr("bob"), coin(input, u128::MAX), coin(output, amount), NOW)
        } else {
            SwapOrder::sell(addr("bob"), coin(input, amount), coin(output, 0), NOW)
        };
        let before = store.clone();
        match swap(&mut store, &FixedClock(NOW), &rich(), fee(), &order) {
            Ok(_) => {
                prop_assert!(reserves(&store).invariant() >= k_before);
            }
            Err(_) => {
                prop_assert_eq!(&store, &before);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Properties 2–4: Pricing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_quote_consistency(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        x in trade_strategy(),
        fee in fee_strategy(),
    ) {
        let (r_in, r_out, x) = (Amount::new(r_in), Amount::new(r_out), Amount::new(x));
        let Ok(y) = output_from_input(&x, &r_in, &r_out, fee) else {
            panic!("non-zero reserves");
        };
        if !y.is_zero() {
            let Ok(back) = input_required(&y, &r_in, &r_out, fee) else {
                panic!("output below reserve");
            };
            prop_assert!(back <= x, "quote {} exceeds sold {}", back, x);
        }
    }

    #[test]
    fn prop_output_monotonic(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        a in trade_strategy(),
        b in trade_strategy(),
        fee in fee_strategy(),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let (r_in, r_out) = (Amount::new(r_in), Amount::new(r_out));
        let Ok(out_lo) = output_from_input(&Amount::new(lo), &r_in, &r_out, fee) else {
            panic!("non-zero reserves");
        };
        let Ok(out_hi) = output_from_input(&Amount::new(hi), &r_in, &r_out, fee) else {
            panic!("non-zero reserves");
        };
        prop_assert!(out_lo <= out_hi);
    }

    #[test]
    fn prop_reserve_cannot_be_drained(
        r_in in reserve_strategy(),
        r_out in reserve_strategy(),
        x in any::<u128>(),
        extra in 0u128..1_000u128,
    ) {
        let (r_in, r_out) = (Amount::new(r_in), Amount::new(r_out));
        let Ok(y) = output_from_input(&Amount::new(x), &r_in, &r_out, fee()) else {
            panic!("non-zero reserves");
        };
        prop_assert!(y < r_out);

        let wanted = &r_out + &Amount::new(extra);
        let is_insufficient = matches!(
            input_required(&wanted, &r_in, &r_out, fee()),
            Err(AmmError::InsufficientLiquidity { .. })
        );
        prop_assert!(is_insufficient);
    }
}

// ---------------------------------------------------------------------------
// Properties 5–6: Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_add_then_remove_conserves(
        native in reserve_strategy(),
        other in reserve_strategy(),
        deposit in 1u128..=10_000_000u128,
    ) {
        let mut store = seeded(native, other);
        let supply_before = store.total_claims().clone();

        let add = AddLiquidity::new(
            addr("bob"),
            coin("btcx", u128::MAX / 8),
            Amount::new(deposit),
            NOW,
        );
        let Ok(added) = add_liquidity(&mut store, &FixedClock(NOW), &rich(), &add) else {
            panic!("funded proportional deposit");
        };

        let remove = RemoveLiquidity::new(addr("bob"), denom("btcx"), added.minted().clone(), NOW);
        let Ok(removed) = remove_liquidity(&mut store, &FixedClock(NOW), &remove) else {
            panic!("bob owns the claims");
        };

        let one = Amount::new(1);
        let native_in = added.native_deposited().amount();
        let native_out = removed.native_withdrawn().amount();
        prop_assert!(native_out <= native_in);
        prop_assert!(&(native_out + &one) >= native_in);

        let other_in = added.other_deposited().amount();
        let other_out = removed.other_withdrawn().amount();
        prop_assert!(other_out <= other_in);
        prop_assert!(&(other_out + &one) >= other_in);

        prop_assert_eq!(store.total_claims(), &supply_before);
        prop_assert!(store.check_invariants().is_ok());
    }

    #[test]
    fn prop_full_burn_drains_pool(
        native in reserve_strategy(),
        other in reserve_strategy(),
        first_burn in 1u128..=10_000u128,
    ) {
        let mut store = seeded(native, other);
        let clock = FixedClock(NOW);

        let partial =
            RemoveLiquidity::new(addr("alice"), denom("btcx"), Claims::new(first_burn), NOW);
        let Ok(_) = remove_liquidity(&mut store, &clock, &partial) else {
            panic!("alice owns the claims");
        };
        let rest = store.claims_of(&addr("alice"));
        if !rest.is_zero() {
            let full = RemoveLiquidity::new(addr("alice"), denom("btcx"), rest, NOW);
            let Ok(_) = remove_liquidity(&mut store, &clock, &full) else {
                panic!("alice owns the claims");
            };
        }

        let pool = reserves(&store);
        prop_assert!(pool.native_reserve().is_zero());
        prop_assert!(pool.reserve().is_zero());
        prop_assert!(store.total_claims().is_zero());
    }
}
