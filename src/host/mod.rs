//! In-memory host collaborators.
//!
//! [`MemoryLedger`] and [`ManualClock`] implement the
//! [`Ledger`](crate::traits::Ledger) and [`Clock`](crate::traits::Clock)
//! seams for tests, simulations and hosts that keep balances in process.

mod clock;
mod ledger;

pub use clock::ManualClock;
pub use ledger::MemoryLedger;
