//! Asset movements handed to the ledger.

use core::fmt;

use super::{Address, Coin};

/// A party to a [`Transfer`].
///
/// Pool reserves are held by a single escrow account owned by the AMM
/// (a module-style system account).  Every movement is either from a
/// holder into escrow or from escrow back to a holder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Account {
    /// A user-controlled address.
    Holder(Address),
    /// The AMM escrow account that holds all pool reserves.
    Escrow,
}

impl Account {
    /// Returns the holder address, or `None` for the escrow account.
    #[must_use]
    pub const fn address(&self) -> Option<&Address> {
        match self {
            Self::Holder(address) => Some(address),
            Self::Escrow => None,
        }
    }

    /// Returns `true` for the escrow account.
    #[must_use]
    pub const fn is_escrow(&self) -> bool {
        matches!(self, Self::Escrow)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Holder(address) => write!(f, "{address}"),
            Self::Escrow => write!(f, "<escrow>"),
        }
    }
}

/// An instruction for the external ledger to move `coins` from one
/// account to another.
///
/// Operation handlers never move assets themselves; they return an ordered
/// list of `Transfer`s describing what the ledger must apply.
///
/// # Examples
///
/// ```
/// use unipool::domain::{Account, Address, Amount, Coin, Denom, Transfer};
///
/// let alice = Address::new("alice").expect("valid");
/// let atom = Coin::new(Denom::new("atom").expect("valid"), Amount::new(10));
/// let deposit = Transfer::into_escrow(alice.clone(), vec![atom]);
/// assert_eq!(deposit.from(), &Account::Holder(alice));
/// assert!(deposit.to().is_escrow());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transfer {
    from: Account,
    to: Account,
    coins: Vec<Coin>,
}

impl Transfer {
    /// Creates a transfer between two arbitrary accounts.
    #[must_use]
    pub const fn new(from: Account, to: Account, coins: Vec<Coin>) -> Self {
        Self { from, to, coins }
    }

    /// A movement from `holder` into the escrow account.
    #[must_use]
    pub const fn into_escrow(holder: Address, coins: Vec<Coin>) -> Self {
        Self::new(Account::Holder(holder), Account::Escrow, coins)
    }

    /// A movement from the escrow account to `holder`.
    #[must_use]
    pub const fn out_of_escrow(holder: Address, coins: Vec<Coin>) -> Self {
        Self::new(Account::Escrow, Account::Holder(holder), coins)
    }

    /// Returns the debited account.
    #[must_use]
    pub const fn from(&self) -> &Account {
        &self.from
    }

    /// Returns the credited account.
    #[must_use]
    pub const fn to(&self) -> &Account {
        &self.to
    }

    /// Returns the coins moved.
    #[must_use]
    pub fn coins(&self) -> &[Coin] {
        &self.coins
    }

    /// Returns the transfer with debit and credit sides swapped.
    ///
    /// Applying a transfer and then its reverse leaves balances unchanged.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone(), self.coins.clone())
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: ", self.from, self.to)?;
        for (i, coin) in self.coins.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{coin}")?;
        }
        Ok(())
    }
}
