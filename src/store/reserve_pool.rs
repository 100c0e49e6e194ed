//! Reserve balances of a single native/other pool.

use core::fmt;

use num_bigint::BigUint;

use crate::domain::Amount;

/// The reserves of one pool, keyed in the store by its non-native denom.
///
/// Every pool pairs the native asset with exactly one other asset, so the
/// pool only needs the two balances.  Reserves include collected fees.
///
/// # Examples
///
/// ```
/// use unipool::domain::Amount;
/// use unipool::store::ReservePool;
///
/// let pool = ReservePool::new(Amount::new(1_000), Amount::new(4_000));
/// assert_eq!(pool.invariant().to_string(), "4000000");
/// assert!(!pool.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReservePool {
    native_reserve: Amount,
    reserve: Amount,
}

impl ReservePool {
    /// Creates a pool snapshot from its two reserves.
    pub const fn new(native_reserve: Amount, reserve: Amount) -> Self {
        Self {
            native_reserve,
            reserve,
        }
    }

    /// Returns the native asset reserve.
    #[must_use]
    pub const fn native_reserve(&self) -> &Amount {
        &self.native_reserve
    }

    /// Returns the other asset reserve.
    #[must_use]
    pub const fn reserve(&self) -> &Amount {
        &self.reserve
    }

    /// Returns the constant-product invariant `k = native × other`.
    #[must_use]
    pub fn invariant(&self) -> BigUint {
        self.native_reserve.as_biguint() * self.reserve.as_biguint()
    }

    /// Returns `true` once every unit of the native reserve was redeemed.
    ///
    /// An empty pool cannot price swaps and is re-seeded by the next
    /// deposit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.native_reserve.is_zero()
    }
}

impl fmt::Display for ReservePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} native, {} other)", self.native_reserve, self.reserve)
    }
}
