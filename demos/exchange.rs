//! Reserve-pool exchange example.
//!
//! Seeds an atom/btcx pool, sells and buys against it, routes a swap
//! between two non-native assets, and withdraws the liquidity again, all
//! through [`Exchange`] with the in-memory ledger and clock.
//!
//! # Run
//!
//! ```bash
//! cargo run --example exchange
//! ```

use unipool::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Reserve-pool exchange (x · y = k) ===\n");

    // ── 1. Fund two accounts on an in-memory ledger ─────────────────────
    let atom = Denom::new("atom")?;
    let btcx = Denom::new("btcx")?;
    let ethx = Denom::new("ethx")?;
    let provider = Address::new("provider")?;
    let trader = Address::new("trader")?;

    let mut ledger = MemoryLedger::new();
    for who in [&provider, &trader] {
        for denom in [&atom, &btcx, &ethx] {
            ledger.credit(
                &Account::Holder(who.clone()),
                &Coin::new(denom.clone(), Amount::new(1_000_000)),
            );
        }
    }

    // ── 2. Build the exchange with the default 0.30% fee ────────────────
    let config = AmmConfig::default();
    let mut exchange = Exchange::from_config(&config, ledger, ManualClock::default())?;
    let deadline = Timestamp::from_secs(3_600);
    println!("Config: {config}");

    // ── 3. Seed atom/btcx and atom/ethx ─────────────────────────────────
    for denom in [&btcx, &ethx] {
        let seeded = exchange.add_liquidity(&AddLiquidity::new(
            provider.clone(),
            Coin::new(denom.clone(), Amount::new(100_000)),
            Amount::new(100_000),
            deadline,
        ))?;
        println!(
            "Seeded {denom}: deposited {} + {}, minted {} claims",
            seeded.native_deposited(),
            seeded.other_deposited(),
            seeded.minted()
        );
    }

    // ── 4. Sell 1 000 atom for btcx ─────────────────────────────────────
    let sold = exchange.swap(&SwapOrder::sell(
        trader.clone(),
        Coin::new(atom.clone(), Amount::new(1_000)),
        Coin::new(btcx.clone(), Amount::new(980)),
        deadline,
    ))?;
    println!("\n--- Sell ---");
    println!("  Sold:    {}", sold.sold());
    println!("  Bought:  {}", sold.bought());
    println!("  Pool:    {}", exchange.store().pool(&btcx)?);

    // ── 5. Buy exactly 500 atom with btcx ───────────────────────────────
    let bought = exchange.swap(&SwapOrder::buy(
        trader.clone(),
        Coin::new(btcx.clone(), Amount::new(600)),
        Coin::new(atom.clone(), Amount::new(500)),
        deadline,
    ))?;
    println!("\n--- Buy ---");
    println!("  Paid:    {}", bought.sold());
    println!("  Bought:  {}", bought.bought());

    // ── 6. Route btcx → atom → ethx ─────────────────────────────────────
    let routed = exchange.swap(&SwapOrder::sell(
        trader.clone(),
        Coin::new(btcx.clone(), Amount::new(2_000)),
        Coin::new(ethx.clone(), Amount::zero()),
        deadline,
    ))?;
    println!("\n--- Routed swap ---");
    println!("  Sold:    {}", routed.sold());
    println!("  Bought:  {}", routed.bought());

    // ── 7. A past deadline is rejected ──────────────────────────────────
    exchange.clock_mut().set(deadline.plus_secs(1));
    let late = exchange.swap(&SwapOrder::sell(
        trader.clone(),
        Coin::new(atom.clone(), Amount::new(1)),
        Coin::new(btcx.clone(), Amount::zero()),
        deadline,
    ));
    if let Err(err) = late {
        println!("\nLate order rejected: {err}");
    }

    // ── 8. Redeem the provider's share of the btcx pool ─────────────────
    // Claims are global: 100 000 of the 200 000 outstanding is half of
    // whichever pool they are redeemed against.
    println!("\nProvider holds {} claims", exchange.store().claims_of(&provider));
    let withdrawn = exchange.remove_liquidity(&RemoveLiquidity::new(
        provider.clone(),
        btcx.clone(),
        Claims::new(100_000),
        deadline.plus_secs(60),
    ))?;
    println!("\n--- Withdraw ---");
    println!("  Burned:  {} claims", withdrawn.burned());
    println!("  Native:  {}", withdrawn.native_withdrawn());
    println!("  Other:   {}", withdrawn.other_withdrawn());
    println!("  Pool:    {}", exchange.store().pool(&btcx)?);

    let holder = Account::Holder(trader);
    println!("\nTrader balances:");
    for denom in [&atom, &btcx, &ethx] {
        println!("  {denom}: {}", exchange.ledger().balance(&holder, denom));
    }

    exchange.store().check_invariants()?;
    println!("\nInvariants hold.");
    Ok(())
}
