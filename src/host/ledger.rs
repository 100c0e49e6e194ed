//! In-memory ledger.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::domain::{Account, Address, Amount, Coin, Denom, Transfer};
use crate::error::LedgerError;
use crate::traits::Ledger;

/// A [`Ledger`] that keeps every balance, including the escrow account, in
/// ordered maps.
///
/// Each transfer is atomic: all debits are checked before any balance
/// changes.  Accounts can be frozen, denoms halted, and a transfer budget
/// set, so hosts and tests can observe how an exchange reacts to a refused
/// movement.
///
/// # Examples
///
/// ```
/// use unipool::domain::{Account, Address, Amount, Coin, Denom, Transfer};
/// use unipool::host::MemoryLedger;
/// use unipool::traits::Ledger;
///
/// let alice = Address::new("alice").expect("valid");
/// let atom = Denom::new("atom").expect("valid");
/// let mut ledger = MemoryLedger::new();
/// ledger.credit(&Account::Holder(alice.clone()), &Coin::new(atom.clone(), Amount::new(10)));
///
/// let deposit = Transfer::into_escrow(alice.clone(), vec![Coin::new(atom.clone(), Amount::new(4))]);
/// ledger.transfer(&deposit).expect("funded");
/// assert_eq!(ledger.balance(&Account::Escrow, &atom), Amount::new(4));
/// assert_eq!(ledger.balance(&Account::Holder(alice), &atom), Amount::new(6));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLedger {
    balances: BTreeMap<Account, BTreeMap<Denom, Amount>>,
    frozen: BTreeSet<Account>,
    halted: BTreeSet<Denom>,
    budget: Option<usize>,
    applied: usize,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `coin` into `account` out of thin air.
    pub fn credit(&mut self, account: &Account, coin: &Coin) {
        if coin.is_zero() {
            return;
        }
        let balance = self
            .balances
            .entry(account.clone())
            .or_default()
            .entry(coin.denom().clone())
            .or_default();
        *balance = &*balance + coin.amount();
    }

    /// Returns the balance of `denom` held by `account`.
    pub fn balance(&self, account: &Account, denom: &Denom) -> Amount {
        self.balances
            .get(account)
            .and_then(|coins| coins.get(denom))
            .cloned()
            .unwrap_or_default()
    }

    /// Rejects every transfer that debits or credits `account`.
    pub fn freeze(&mut self, account: Account) {
        self.frozen.insert(account);
    }

    /// Lifts a freeze.
    pub fn unfreeze(&mut self, account: &Account) {
        self.frozen.remove(account);
    }

    /// Rejects every transfer that carries `denom`.
    pub fn halt(&mut self, denom: Denom) {
        self.halted.insert(denom);
    }

    /// Lifts a halt.
    pub fn resume(&mut self, denom: &Denom) {
        self.halted.remove(denom);
    }

    /// Accepts `remaining` more transfers, then rejects all others.
    pub fn limit_transfers(&mut self, remaining: usize) {
        self.budget = Some(remaining);
    }

    /// Removes the transfer budget.
    pub fn unlimited_transfers(&mut self) {
        self.budget = None;
    }

    /// Returns how many transfers were applied.
    #[must_use]
    pub const fn applied_transfers(&self) -> usize {
        self.applied
    }

    fn debit(&mut self, account: &Account, denom: &Denom, amount: &Amount) {
        let Some(coins) = self.balances.get_mut(account) else {
            return;
        };
        if let Some(held) = coins.get_mut(denom) {
            *held = held.checked_sub(amount).unwrap_or_default();
            if held.is_zero() {
                coins.remove(denom);
            }
        }
        if coins.is_empty() {
            self.balances.remove(account);
        }
    }
}

impl Ledger for MemoryLedger {
    fn has_balance(&self, address: &Address, coin: &Coin) -> bool {
        self.balance(&Account::Holder(address.clone()), coin.denom()) >= *coin.amount()
    }

    fn transfer(&mut self, transfer: &Transfer) -> Result<(), LedgerError> {
        for account in [transfer.from(), transfer.to()] {
            if self.frozen.contains(account) {
                return Err(LedgerError::Rejected(format!("account {account} is frozen")));
            }
        }
        if let Some(coin) = transfer
            .coins()
            .iter()
            .find(|c| self.halted.contains(c.denom()))
        {
            return Err(LedgerError::Rejected(format!("{} is halted", coin.denom())));
        }
        if self.budget == Some(0) {
            return Err(LedgerError::Rejected("transfer budget exhausted".into()));
        }

        let mut debits: BTreeMap<&Denom, Amount> = BTreeMap::new();
        for coin in transfer.coins() {
            let total = debits.entry(coin.denom()).or_default();
            *total = &*total + coin.amount();
        }
        for (denom, needed) in &debits {
            if self.balance(transfer.from(), denom) < *needed {
                return Err(LedgerError::InsufficientBalance(Coin::new(
                    (*denom).clone(),
                    needed.clone(),
                )));
            }
        }

        for (denom, amount) in &debits {
            self.debit(transfer.from(), denom, amount);
            self.credit(transfer.to(), &Coin::new((*denom).clone(), amount.clone()));
        }
        if let Some(budget) = self.budget.as_mut() {
            *budget = budget.saturating_sub(1);
        }
        self.applied += 1;
        debug!(%transfer, "ledger transfer applied");
        Ok(())
    }
}
