//! Rounding helper for big-integer division.
//!
//! [`div_round`] is the low-level building block every pricing formula
//! divides through.  It is the only place the crate divides raw
//! [`BigUint`] values, so a zero denominator always surfaces as
//! [`AmmError::DivisionByZero`] rather than a panic.
//!
//! # Convention
//!
//! **Always round in the pool's favor**:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Amount paid out of a reserve | [`Rounding::Down`] |
//! | Amount paid into a reserve | [`Rounding::Up`] |
//! | Claims minted | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use num_bigint::BigUint;
//! use unipool::domain::Rounding;
//! use unipool::math::div_round;
//!
//! let ten = BigUint::from(10u32);
//! let three = BigUint::from(3u32);
//! assert_eq!(div_round(&ten, &three, Rounding::Down).ok(), Some(BigUint::from(3u32)));
//! assert_eq!(div_round(&ten, &three, Rounding::Up).ok(), Some(BigUint::from(4u32)));
//! assert!(div_round(&ten, &BigUint::from(0u32), Rounding::Down).is_err());
//! ```

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

use crate::domain::Rounding;
use crate::error::AmmError;

/// Big-integer division with explicit rounding direction.
///
/// - [`Rounding::Down`]: floor division.
/// - [`Rounding::Up`]: smallest integer ≥ the exact quotient.
///
/// # Errors
///
/// Returns [`AmmError::DivisionByZero`] if `denominator` is zero.
pub fn div_round(
    numerator: &BigUint,
    denominator: &BigUint,
    rounding: Rounding,
) -> Result<BigUint, AmmError> {
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let (quotient, remainder) = numerator.div_rem(denominator);
    if rounding.is_up() && !remainder.is_zero() {
        return Ok(quotient + 1u32);
    }
    Ok(quotient)
}
