//! Collaborator traits at the seams of the AMM core.
//!
//! The core depends on three external services and implements none of
//! them: [`Clock`] for block time, [`Ledger`] for balances and transfers,
//! and [`FeeSource`] for governed fee parameters.  [`FromConfig`] is the
//! uniform constructor used by the store and the exchange.

mod clock;
mod fee_source;
mod from_config;
mod ledger;

pub use clock::Clock;
pub use fee_source::FeeSource;
pub use from_config::FromConfig;
pub use ledger::Ledger;
