//! Claim-token ("UNI") units.

use core::fmt;
use core::ops::Add;

use num_bigint::BigUint;
use num_traits::Zero;

use super::Amount;

/// A quantity of claim tokens.
///
/// Claim tokens are minted to liquidity providers on deposit and burned on
/// withdrawal; they represent a proportional share of pool reserves.  The
/// type is distinct from [`Amount`] so that a claim balance can never be
/// passed where an asset amount is expected, even though both are backed
/// by arbitrary-precision unsigned integers.
///
/// # Examples
///
/// ```
/// use unipool::domain::Claims;
///
/// let a = Claims::new(1_000);
/// let b = Claims::new(2_000);
/// assert_eq!(&a + &b, Claims::new(3_000));
/// assert_eq!(a.checked_sub(&b), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Claims(BigUint);

impl Claims {
    /// Creates a new `Claims` value from a `u128`.
    pub fn new(value: u128) -> Self {
        Self(BigUint::from(value))
    }

    /// No claims.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns a reference to the underlying big integer.
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        if other.0 > self.0 {
            return None;
        }
        Some(Self(&self.0 - &other.0))
    }

    /// Builds a claim count from an [`Amount`] (first-provider convention:
    /// the native deposit becomes the minted claims).
    pub fn from_amount(amount: &Amount) -> Self {
        Self(amount.as_biguint().clone())
    }
}

impl From<BigUint> for Claims {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u128> for Claims {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl<'a> Add<&'a Claims> for &'a Claims {
    type Output = Claims;

    fn add(self, rhs: &'a Claims) -> Self::Output {
        Claims(&self.0 + &rhs.0)
    }
}

impl Add for Claims {
    type Output = Claims;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl fmt::Display for Claims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
