//! Results returned by the operation handlers.

use super::{Claims, Coin, Transfer};

/// The outcome of a committed swap.
///
/// `sold` is what left the sender (the computed input for a buy order, the
/// exact input for a sell order); `bought` is what the sender receives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    sold: Coin,
    bought: Coin,
    transfers: Vec<Transfer>,
}

impl SwapOutcome {
    pub(crate) const fn new(sold: Coin, bought: Coin, transfers: Vec<Transfer>) -> Self {
        Self {
            sold,
            bought,
            transfers,
        }
    }

    /// Returns the coin paid into the pool.
    #[must_use]
    pub const fn sold(&self) -> &Coin {
        &self.sold
    }

    /// Returns the coin paid out of the pool.
    #[must_use]
    pub const fn bought(&self) -> &Coin {
        &self.bought
    }

    /// Returns the ordered movements the ledger must apply.
    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }
}

/// The outcome of a committed deposit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddLiquidityOutcome {
    minted: Claims,
    native_deposited: Coin,
    other_deposited: Coin,
    created_pool: bool,
    transfers: Vec<Transfer>,
}

impl AddLiquidityOutcome {
    pub(crate) const fn new(
        minted: Claims,
        native_deposited: Coin,
        other_deposited: Coin,
        created_pool: bool,
        transfers: Vec<Transfer>,
    ) -> Self {
        Self {
            minted,
            native_deposited,
            other_deposited,
            created_pool,
            transfers,
        }
    }

    /// Returns the claims credited to the depositor.
    pub const fn minted(&self) -> &Claims {
        &self.minted
    }

    /// Returns the native asset moved into the pool.
    #[must_use]
    pub const fn native_deposited(&self) -> &Coin {
        &self.native_deposited
    }

    /// Returns the other asset moved into the pool.
    #[must_use]
    pub const fn other_deposited(&self) -> &Coin {
        &self.other_deposited
    }

    /// Returns `true` if this deposit created (or re-seeded) the pool.
    #[must_use]
    pub const fn created_pool(&self) -> bool {
        self.created_pool
    }

    /// Returns the ordered movements the ledger must apply.
    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }
}

/// The outcome of a committed withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoveLiquidityOutcome {
    burned: Claims,
    native_withdrawn: Coin,
    other_withdrawn: Coin,
    transfers: Vec<Transfer>,
}

impl RemoveLiquidityOutcome {
    pub(crate) const fn new(
        burned: Claims,
        native_withdrawn: Coin,
        other_withdrawn: Coin,
        transfers: Vec<Transfer>,
    ) -> Self {
        Self {
            burned,
            native_withdrawn,
            other_withdrawn,
            transfers,
        }
    }

    /// Returns the claims burned.
    pub const fn burned(&self) -> &Claims {
        &self.burned
    }

    /// Returns the native asset paid out.
    #[must_use]
    pub const fn native_withdrawn(&self) -> &Coin {
        &self.native_withdrawn
    }

    /// Returns the other asset paid out.
    #[must_use]
    pub const fn other_withdrawn(&self) -> &Coin {
        &self.other_withdrawn
    }

    /// Returns the ordered movements the ledger must apply.
    #[must_use]
    pub fn transfers(&self) -> &[Transfer] {
        &self.transfers
    }
}
