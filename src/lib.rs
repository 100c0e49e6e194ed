//! # unipool
//!
//! Constant-product AMM core: a reserve-pool ledger that lets parties swap
//! one asset for another and lets liquidity providers deposit paired assets
//! for claim tokens they later redeem for a proportional share of reserves.
//!
//! Every pool pairs a single native asset with one other asset.  The core
//! computes prices and asset movements; signature checks, block
//! production and balance storage belong to the host, reached through the
//! [`Ledger`](traits::Ledger), [`Clock`](traits::Clock) and
//! [`FeeSource`](traits::FeeSource) seams.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` for config, domain and store types |
//!
//! # Quick Start
//!
//! ```rust
//! use unipool::prelude::*;
//!
//! let alice = Address::new("alice").expect("valid address");
//! let atom = Denom::new("atom").expect("valid denom");
//! let btcx = Denom::new("btcx").expect("valid denom");
//!
//! // 1. Fund the sender on an in-memory ledger
//! let mut ledger = MemoryLedger::new();
//! let holder = Account::Holder(alice.clone());
//! ledger.credit(&holder, &Coin::new(atom.clone(), Amount::new(2_000)));
//! ledger.credit(&holder, &Coin::new(btcx.clone(), Amount::new(1_000)));
//!
//! // 2. Build an exchange with the default 0.30% fee
//! let mut exchange = Exchange::from_config(&AmmConfig::default(), ledger, ManualClock::default())
//!     .expect("valid config");
//! let deadline = Timestamp::from_secs(60);
//!
//! // 3. Seed the atom/btcx pool
//! exchange
//!     .add_liquidity(&AddLiquidity::new(
//!         alice.clone(),
//!         Coin::new(btcx.clone(), Amount::new(1_000)),
//!         Amount::new(1_000),
//!         deadline,
//!     ))
//!     .expect("funded deposit");
//!
//! // 4. Sell 100 atom for at least 90 btcx
//! let outcome = exchange
//!     .swap(&SwapOrder::sell(
//!         alice,
//!         Coin::new(atom, Amount::new(100)),
//!         Coin::new(btcx.clone(), Amount::new(90)),
//!         deadline,
//!     ))
//!     .expect("swap succeeded");
//! assert_eq!(outcome.bought(), &Coin::new(btcx, Amount::new(90)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │    Host      │  ledger, clock, fee source
//! └──────┬──────┘
//!        │ swap / add_liquidity / remove_liquidity
//!        ▼
//! ┌─────────────┐
//! │  Exchange    │  snapshot, settle transfers, roll back on refusal
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Handlers    │  validate, price, mutate the store, emit transfers
//! └──────┬──────┘
//!        │                 ┌─────────────┐
//!        ├────────────────▶│  Pricing     │  pure constant-product math
//!        ▼                 └─────────────┘
//! ┌─────────────┐
//! │  PoolStore   │  reserves, claim supply, claim balances
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Denom`](domain::Denom), [`Coin`](domain::Coin), requests and outcomes |
//! | [`traits`] | Host seams: [`Ledger`](traits::Ledger), [`Clock`](traits::Clock), [`FeeSource`](traits::FeeSource), [`FromConfig`](traits::FromConfig) |
//! | [`config`] | [`AmmConfig`](config::AmmConfig): native denom and fee parameters |
//! | [`math`]   | Rounded division and the [`pricing`](math::pricing) engine |
//! | [`store`]  | [`PoolStore`](store::PoolStore) and [`ReservePool`](store::ReservePool) |
//! | [`handlers`] | Swap, add-liquidity and remove-liquidity handlers |
//! | [`exchange`] | [`Exchange`](exchange::Exchange): handler + ledger settlement with rollback |
//! | [`host`]   | In-memory [`MemoryLedger`](host::MemoryLedger) and [`ManualClock`](host::ManualClock) |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod handlers;
pub mod host;
pub mod math;
pub mod prelude;
pub mod store;
pub mod traits;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
