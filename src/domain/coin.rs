//! An amount of a specific asset.

use core::fmt;

use super::{Amount, Denom};

/// A [`Denom`] paired with an [`Amount`].
///
/// # Examples
///
/// ```
/// use unipool::domain::{Amount, Coin, Denom};
///
/// let coin = Coin::new(Denom::new("atom").expect("valid"), Amount::new(100));
/// assert_eq!(coin.to_string(), "100atom");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coin {
    denom: Denom,
    amount: Amount,
}

impl Coin {
    /// Creates a new `Coin`.
    pub const fn new(denom: Denom, amount: Amount) -> Self {
        Self { denom, amount }
    }

    /// Returns the asset identifier.
    #[must_use]
    pub const fn denom(&self) -> &Denom {
        &self.denom
    }

    /// Returns the amount.
    pub const fn amount(&self) -> &Amount {
        &self.amount
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}
