//! Swap fee expressed as a retained fraction.

use core::fmt;

use num_bigint::BigUint;

use crate::error::AmmError;

/// Swap fee as a numerator/denominator pair.
///
/// `fee_n / fee_d` is the fraction of the input that takes part in pricing;
/// the remainder `(fee_d − fee_n) / fee_d` stays in the pool as the fee.
/// The classic 0.3% fee is `997 / 1000`.
///
/// # Invariants
///
/// `0 < fee_n ≤ fee_d`.  `fee_n == fee_d` is the zero-fee limit.
///
/// # Examples
///
/// ```
/// use unipool::domain::FeeParams;
///
/// let fee = FeeParams::new(997, 1_000).expect("valid fee");
/// assert_eq!(fee.fee_bps(), 30);
/// assert!(FeeParams::new(0, 1_000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeeParams {
    fee_n: u64,
    fee_d: u64,
}

impl FeeParams {
    /// The 0.3% fee (`997 / 1000`).
    pub const DEFAULT: Self = Self {
        fee_n: 997,
        fee_d: 1_000,
    };

    /// Creates validated fee parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] unless `0 < fee_n ≤ fee_d`.
    pub fn new(fee_n: u64, fee_d: u64) -> Result<Self, AmmError> {
        let params = Self { fee_n, fee_d };
        params.validate()?;
        Ok(params)
    }

    /// Re-checks the invariants; used for values that bypassed [`new`](Self::new)
    /// (e.g. deserialized configuration).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] unless `0 < fee_n ≤ fee_d`.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.fee_n == 0 || self.fee_n > self.fee_d {
            return Err(AmmError::InvalidFee {
                fee_n: self.fee_n,
                fee_d: self.fee_d,
            });
        }
        Ok(())
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn fee_n(&self) -> u64 {
        self.fee_n
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn fee_d(&self) -> u64 {
        self.fee_d
    }

    /// Returns `true` in the zero-fee limit (`fee_n == fee_d`).
    #[must_use]
    pub const fn is_zero_fee(&self) -> bool {
        self.fee_n == self.fee_d
    }

    /// Effective fee rate in basis points, rounded down.
    #[must_use]
    pub const fn fee_bps(&self) -> u64 {
        if self.fee_d == 0 {
            return 0;
        }
        // u128 keeps the product exact for any pair of u64 inputs.
        let retained = self.fee_d.saturating_sub(self.fee_n) as u128;
        (retained * 10_000 / self.fee_d as u128) as u64
    }

    /// Builds parameters without validation, for exercising guards.
    #[cfg(test)]
    pub(crate) const fn new_unchecked(fee_n: u64, fee_d: u64) -> Self {
        Self { fee_n, fee_d }
    }

    pub(crate) fn numerator(&self) -> BigUint {
        BigUint::from(self.fee_n)
    }

    pub(crate) fn denominator(&self) -> BigUint {
        BigUint::from(self.fee_d)
    }
}

impl Default for FeeParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FeeParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.fee_n, self.fee_d)
    }
}
