//! Host-side driver tying the store to its collaborators.
//!
//! An [`Exchange`] owns a [`PoolStore`], a [`Ledger`], a [`Clock`] and a
//! [`FeeSource`].  Each operation runs the matching handler, then applies
//! the returned transfers through the ledger in order.  If the ledger
//! refuses one, the transfers already applied are reversed (last first)
//! and the store is restored from a snapshot taken before the handler ran,
//! so an operation either commits in both places or in neither.
//!
//! A failed reversal leaves the ledger out of step with the store; it is
//! reported as the fatal [`AmmError::Internal`].

use tracing::{error, instrument, warn};

use crate::config::AmmConfig;
use crate::domain::{
    AddLiquidity, AddLiquidityOutcome, FeeParams, RemoveLiquidity, RemoveLiquidityOutcome,
    SwapOrder, SwapOutcome, Transfer,
};
use crate::error::AmmError;
use crate::handlers;
use crate::store::PoolStore;
use crate::traits::{Clock, FeeSource, FromConfig, Ledger};

/// A constant-product exchange bound to its host collaborators.
///
/// # Examples
///
/// ```
/// use unipool::config::AmmConfig;
/// use unipool::domain::{Account, AddLiquidity, Address, Amount, Coin, Denom, Timestamp};
/// use unipool::exchange::Exchange;
/// use unipool::host::{ManualClock, MemoryLedger};
///
/// let alice = Address::new("alice").expect("valid");
/// let atom = Denom::new("atom").expect("valid");
/// let btcx = Denom::new("btcx").expect("valid");
///
/// let mut ledger = MemoryLedger::new();
/// ledger.credit(&Account::Holder(alice.clone()), &Coin::new(atom.clone(), Amount::new(1_000)));
/// ledger.credit(&Account::Holder(alice.clone()), &Coin::new(btcx.clone(), Amount::new(1_000)));
///
/// let mut exchange = Exchange::from_config(&AmmConfig::default(), ledger, ManualClock::default())
///     .expect("valid config");
/// let outcome = exchange
///     .add_liquidity(&AddLiquidity::new(
///         alice.clone(),
///         Coin::new(btcx.clone(), Amount::new(500)),
///         Amount::new(500),
///         Timestamp::from_secs(60),
///     ))
///     .expect("funded deposit");
/// assert!(outcome.created_pool());
/// assert_eq!(exchange.ledger().balance(&Account::Escrow, &btcx), Amount::new(500));
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<L, C, F = AmmConfig> {
    store: PoolStore,
    ledger: L,
    clock: C,
    fees: F,
}

impl<L, C> Exchange<L, C, AmmConfig>
where
    L: Ledger,
    C: Clock,
{
    /// Builds an exchange with an empty store from a validated
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the configuration is invalid.
    pub fn from_config(config: &AmmConfig, ledger: L, clock: C) -> Result<Self, AmmError> {
        let store = PoolStore::from_config(config)?;
        Ok(Self::new(store, ledger, clock, config.clone()))
    }
}

impl<L, C, F> Exchange<L, C, F>
where
    L: Ledger,
    C: Clock,
    F: FeeSource,
{
    /// Assembles an exchange from an existing store and collaborators.
    pub const fn new(store: PoolStore, ledger: L, clock: C, fees: F) -> Self {
        Self {
            store,
            ledger,
            clock,
            fees,
        }
    }

    /// Returns the pool store.
    #[must_use]
    pub const fn store(&self) -> &PoolStore {
        &self.store
    }

    /// Returns the ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the ledger mutably, e.g. to fund accounts.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Returns the clock.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the clock mutably, e.g. to advance block time.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Returns the fee source.
    #[must_use]
    pub const fn fees(&self) -> &F {
        &self.fees
    }

    /// Consumes the exchange, returning its parts.
    pub fn into_parts(self) -> (PoolStore, L, C, F) {
        (self.store, self.ledger, self.clock, self.fees)
    }

    /// Executes a swap and settles it through the ledger.
    ///
    /// # Errors
    ///
    /// Any error of [`handlers::swap`], [`AmmError::InvalidFee`] if the fee
    /// source yields invalid parameters, [`AmmError::Ledger`] if the ledger
    /// refused a transfer, or [`AmmError::Internal`] if undoing a partial
    /// settlement failed.
    #[instrument(skip_all)]
    pub fn swap(&mut self, order: &SwapOrder) -> Result<SwapOutcome, AmmError> {
        let fee = self.fee_params()?;
        let snapshot = self.store.clone();
        let outcome = handlers::swap(&mut self.store, &self.clock, &self.ledger, fee, order)?;
        self.settle(snapshot, outcome.transfers())?;
        Ok(outcome)
    }

    /// Executes a deposit and settles it through the ledger.
    ///
    /// # Errors
    ///
    /// Any error of [`handlers::add_liquidity`], [`AmmError::Ledger`] if the
    /// ledger refused the transfer, or [`AmmError::Internal`] if undoing a
    /// partial settlement failed.
    #[instrument(skip_all)]
    pub fn add_liquidity(&mut self, request: &AddLiquidity) -> Result<AddLiquidityOutcome, AmmError> {
        let snapshot = self.store.clone();
        let outcome = handlers::add_liquidity(&mut self.store, &self.clock, &self.ledger, request)?;
        self.settle(snapshot, outcome.transfers())?;
        Ok(outcome)
    }

    /// Executes a withdrawal and settles it through the ledger.
    ///
    /// # Errors
    ///
    /// Any error of [`handlers::remove_liquidity`], [`AmmError::Ledger`] if
    /// the ledger refused the transfer, or [`AmmError::Internal`] if undoing
    /// a partial settlement failed.
    #[instrument(skip_all)]
    pub fn remove_liquidity(
        &mut self,
        request: &RemoveLiquidity,
    ) -> Result<RemoveLiquidityOutcome, AmmError> {
        let snapshot = self.store.clone();
        let outcome = handlers::remove_liquidity(&mut self.store, &self.clock, request)?;
        self.settle(snapshot, outcome.transfers())?;
        Ok(outcome)
    }

    fn fee_params(&self) -> Result<FeeParams, AmmError> {
        let fee = self.fees.fee_params();
        fee.validate()?;
        Ok(fee)
    }

    /// Applies `transfers` in order; on refusal undoes the applied prefix
    /// and restores `snapshot`.
    fn settle(&mut self, snapshot: PoolStore, transfers: &[Transfer]) -> Result<(), AmmError> {
        for (applied, transfer) in transfers.iter().enumerate() {
            let Err(refused) = self.ledger.transfer(transfer) else {
                continue;
            };
            warn!(%transfer, error = %refused, "ledger refused transfer; rolling back");
            self.store = snapshot;

            for done in transfers[..applied].iter().rev() {
                let undo = done.reversed();
                if let Err(err) = self.ledger.transfer(&undo) {
                    error!(transfer = %undo, %err, "compensating transfer failed");
                    return Err(AmmError::Internal("ledger compensation failed"));
                }
            }
            return Err(refused.into());
        }
        Ok(())
    }
}
