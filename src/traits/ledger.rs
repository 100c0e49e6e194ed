//! Balance/transfer collaborator.
//!
//! The [`Ledger`] owns every asset balance, including the escrow account
//! that holds pool reserves.  Handlers only *ask* it whether a sender can
//! pay; the movements they compute are applied afterwards by the
//! [`Exchange`](crate::exchange::Exchange) (or by the host directly).
//!
//! # Two-Phase Moves
//!
//! A swap is two transfers: the sender pays into escrow, then escrow pays
//! the sender.  Escrow is the intermediate holder, so the pool never owes
//! assets it has not yet received.

use crate::domain::{Address, Coin, Transfer};
use crate::error::LedgerError;

/// Account balance storage and transfer execution.
pub trait Ledger {
    /// Returns `true` if `address` holds at least `coin`.
    #[must_use]
    fn has_balance(&self, address: &Address, coin: &Coin) -> bool;

    /// Applies one transfer.
    ///
    /// Implementations must apply a transfer atomically: either every coin
    /// in it moves or none does.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::InsufficientBalance`] if the debited account cannot
    ///   cover one of the coins.
    /// - [`LedgerError::Rejected`] for any host-specific refusal.
    fn transfer(&mut self, transfer: &Transfer) -> Result<(), LedgerError>;
}
