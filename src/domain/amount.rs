//! Arbitrary-precision token amount with checked arithmetic.

use core::fmt;
use core::ops::{Add, Mul};
use core::str::FromStr;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use super::Rounding;

/// A raw token amount in the smallest unit of its denom.
///
/// Backed by [`BigUint`], so amounts are unbounded and can never be
/// negative.  Reserve products such as `input_reserve × output_reserve`
/// routinely exceed 128 bits for real token supplies; every pricing
/// formula in this crate is evaluated on `Amount` without truncation.
///
/// Addition and multiplication cannot overflow and are exposed through
/// the [`Add`] and [`Mul`] operators.  Subtraction and division are
/// checked: they return `None` on underflow or division by zero instead
/// of panicking.
///
/// # Examples
///
/// ```
/// use unipool::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(&a + &b, Amount::new(300));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(a.checked_div(&Amount::new(3), Rounding::Up), Some(Amount::new(34)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[must_use]
pub struct Amount(BigUint);

impl Amount {
    /// Creates a new `Amount` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(BigUint::from(value))
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    /// Returns a reference to the underlying big integer.
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Consumes the amount, returning the underlying big integer.
    #[must_use]
    pub fn into_biguint(self) -> BigUint {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: floor division.
    /// - [`Rounding::Up`]: ceiling division.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0.is_zero() {
            return None;
        }
        let quotient = match rounding {
            Rounding::Down => self.0.div_floor(&divisor.0),
            Rounding::Up => self.0.div_ceil(&divisor.0),
        };
        Some(Self(quotient))
    }
}

impl From<BigUint> for Amount {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self::new(value)
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl FromStr for Amount {
    type Err = num_bigint::ParseBigIntError;

    /// Parses a base-10 integer string of any length.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<BigUint>().map(Self)
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Amount> for &'a Amount {
    type Output = Amount;

    fn add(self, rhs: &'a Amount) -> Self::Output {
        Amount(&self.0 + &rhs.0)
    }
}

impl Mul for Amount {
    type Output = Amount;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl<'a> Mul<&'a Amount> for &'a Amount {
    type Output = Amount;

    fn mul(self, rhs: &'a Amount) -> Self::Output {
        Amount(&self.0 * &rhs.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_display() {
        assert_eq!(Amount::new(1_000_000).to_string(), "1000000");
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::zero());
        assert!(Amount::default().is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn parse_beyond_u128() {
        // 2^128 does not fit in a u128.
        let Ok(big) = "340282366920938463463374607431768211456".parse::<Amount>() else {
            panic!("expected valid integer");
        };
        let max = Amount::new(u128::MAX);
        assert!(big > max);
        assert_eq!(big.checked_sub(&max), Some(Amount::new(1)));
    }

    #[test]
    fn parse_rejects_negative() {
        assert!("-1".parse::<Amount>().is_err());
    }

    // -- Add / Mul ----------------------------------------------------------

    #[test]
    fn add_never_overflows() {
        let a = Amount::new(u128::MAX);
        let sum = &a + &a;
        assert!(sum > a);
        assert_eq!(sum.checked_sub(&a), Some(a));
    }

    #[test]
    fn mul_widens() {
        let a = Amount::new(u128::MAX);
        let product = &a * &a;
        let Some(back) = product.checked_div(&a, Rounding::Down) else {
            panic!("expected quotient");
        };
        assert_eq!(back, a);
    }

    #[test]
    fn owned_operators() {
        assert_eq!(Amount::new(2) + Amount::new(3), Amount::new(5));
        assert_eq!(Amount::new(2) * Amount::new(3), Amount::new(6));
    }

    // -- checked_sub --------------------------------------------------------

    #[test]
    fn sub_to_zero() {
        let a = Amount::new(42);
        assert_eq!(a.checked_sub(&a), Some(Amount::zero()));
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    // -- checked_div --------------------------------------------------------

    #[test]
    fn div_exact_both_directions() {
        let a = Amount::new(100);
        let d = Amount::new(10);
        assert_eq!(a.checked_div(&d, Rounding::Down), Some(Amount::new(10)));
        assert_eq!(a.checked_div(&d, Rounding::Up), Some(Amount::new(10)));
    }

    #[test]
    fn div_remainder() {
        let a = Amount::new(10);
        let d = Amount::new(3);
        assert_eq!(a.checked_div(&d, Rounding::Down), Some(Amount::new(3)));
        assert_eq!(a.checked_div(&d, Rounding::Up), Some(Amount::new(4)));
    }

    #[test]
    fn div_by_zero() {
        let a = Amount::new(100);
        assert_eq!(a.checked_div(&Amount::zero(), Rounding::Down), None);
        assert_eq!(a.checked_div(&Amount::zero(), Rounding::Up), None);
    }

    #[test]
    fn div_zero_numerator() {
        let d = Amount::new(10);
        assert_eq!(Amount::zero().checked_div(&d, Rounding::Up), Some(Amount::zero()));
    }

    // -- Ordering -----------------------------------------------------------

    #[test]
    fn ordering() {
        assert!(Amount::new(1) < Amount::new(2));
        assert_eq!(Amount::from(5u64), Amount::new(5));
    }
}
