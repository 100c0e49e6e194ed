//! Add- and remove-liquidity requests.

use super::{Address, Amount, Claims, Coin, Denom, Timestamp};

/// A request to deposit a native/other asset pair and mint claims.
///
/// `deposit_amount` is the exact native-asset deposit.  For an existing
/// pool, `deposit.amount` is the most of the other asset the caller is
/// willing to supply; the pool charges only what keeps its price unchanged.
/// For a new pool both amounts are taken as given and set the initial
/// exchange rate.
///
/// # Examples
///
/// ```
/// use unipool::domain::{AddLiquidity, Address, Amount, Coin, Denom, Timestamp};
///
/// let req = AddLiquidity::new(
///     Address::new("alice").expect("valid"),
///     Coin::new(Denom::new("btcx").expect("valid"), Amount::new(500)),
///     Amount::new(500),
///     Timestamp::MAX,
/// );
/// assert_eq!(req.deposit_amount(), &Amount::new(500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddLiquidity {
    sender: Address,
    deposit: Coin,
    deposit_amount: Amount,
    deadline: Timestamp,
}

impl AddLiquidity {
    /// Creates an add-liquidity request.
    #[must_use]
    pub const fn new(
        sender: Address,
        deposit: Coin,
        deposit_amount: Amount,
        deadline: Timestamp,
    ) -> Self {
        Self {
            sender,
            deposit,
            deposit_amount,
            deadline,
        }
    }

    /// Returns the depositor.
    #[must_use]
    pub const fn sender(&self) -> &Address {
        &self.sender
    }

    /// Returns the non-native deposit (maximum for an existing pool).
    #[must_use]
    pub const fn deposit(&self) -> &Coin {
        &self.deposit
    }

    /// Returns the native-asset deposit.
    pub const fn deposit_amount(&self) -> &Amount {
        &self.deposit_amount
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }
}

/// A request to burn claims and withdraw a proportional share of a pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemoveLiquidity {
    sender: Address,
    withdraw: Denom,
    withdraw_amount: Claims,
    deadline: Timestamp,
}

impl RemoveLiquidity {
    /// Creates a remove-liquidity request burning `withdraw_amount` claims
    /// against the pool of `withdraw`.
    #[must_use]
    pub const fn new(
        sender: Address,
        withdraw: Denom,
        withdraw_amount: Claims,
        deadline: Timestamp,
    ) -> Self {
        Self {
            sender,
            withdraw,
            withdraw_amount,
            deadline,
        }
    }

    /// Returns the holder burning claims.
    #[must_use]
    pub const fn sender(&self) -> &Address {
        &self.sender
    }

    /// Returns the denom identifying the pool.
    #[must_use]
    pub const fn withdraw(&self) -> &Denom {
        &self.withdraw
    }

    /// Returns the claims to burn.
    pub const fn withdraw_amount(&self) -> &Claims {
        &self.withdraw_amount
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn btc() -> Denom {
        let Ok(d) = Denom::new("btcx") else {
            panic!("valid denom");
        };
        d
    }

    fn alice() -> Address {
        let Ok(a) = Address::new("alice") else {
            panic!("valid address");
        };
        a
    }

    #[test]
    fn add_accessors() {
        let deposit = Coin::new(btc(), Amount::new(10));
        let req = AddLiquidity::new(alice(), deposit.clone(), Amount::new(20), Timestamp::MAX);
        assert_eq!(req.sender(), &alice());
        assert_eq!(req.deposit(), &deposit);
        assert_eq!(req.deposit_amount(), &Amount::new(20));
        assert_eq!(req.deadline(), Timestamp::MAX);
    }

    #[test]
    fn remove_accessors() {
        let req = RemoveLiquidity::new(alice(), btc(), Claims::new(5), Timestamp::from_secs(9));
        assert_eq!(req.sender(), &alice());
        assert_eq!(req.withdraw(), &btc());
        assert_eq!(req.withdraw_amount(), &Claims::new(5));
        assert_eq!(req.deadline(), Timestamp::from_secs(9));
    }
}
