//! Top-level AMM configuration.
//!
//! [`AmmConfig`] is the declarative blueprint for an AMM instance: which
//! denom is the native asset present in every pool, and which fee
//! parameters apply to swaps.  It is validated once at construction and
//! again by every [`FromConfig`](crate::traits::FromConfig) consumer, so a
//! configuration deserialized from an untrusted source cannot slip through.
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `native_denom` | `"atom"` |
//! | `fee_params` | `997/1000` (0.30%) |

use crate::domain::{Denom, FeeParams};
use crate::error::AmmError;
use crate::traits::FeeSource;

/// Default native asset.
pub const DEFAULT_NATIVE_DENOM: &str = "atom";

/// Configuration for an AMM instance.
///
/// # Examples
///
/// ```
/// use unipool::config::AmmConfig;
/// use unipool::domain::{Denom, FeeParams};
///
/// let cfg = AmmConfig::new(
///     Denom::new("stake").expect("valid denom"),
///     FeeParams::new(997, 1_000).expect("valid fee"),
/// )
/// .expect("valid config");
/// assert_eq!(cfg.native_denom().as_str(), "stake");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmmConfig {
    native_denom: Denom,
    fee_params: FeeParams,
}

impl AmmConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee parameters are invalid.
    pub fn new(native_denom: Denom, fee_params: FeeParams) -> Result<Self, AmmError> {
        let config = Self {
            native_denom,
            fee_params,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the fee parameters are invalid.
    pub fn validate(&self) -> Result<(), AmmError> {
        self.fee_params.validate()
    }

    /// Returns the native denom.
    #[must_use]
    pub const fn native_denom(&self) -> &Denom {
        &self.native_denom
    }

    /// Returns the swap fee parameters.
    #[must_use]
    pub const fn fee_params(&self) -> FeeParams {
        self.fee_params
    }

    /// Returns a copy with different fee parameters.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `fee_params` is invalid.
    pub fn with_fee_params(&self, fee_params: FeeParams) -> Result<Self, AmmError> {
        Self::new(self.native_denom.clone(), fee_params)
    }
}

impl Default for AmmConfig {
    fn default() -> Self {
        Self {
            native_denom: Denom::from_static(DEFAULT_NATIVE_DENOM),
            fee_params: FeeParams::DEFAULT,
        }
    }
}

impl FeeSource for AmmConfig {
    fn fee_params(&self) -> FeeParams {
        self.fee_params
    }
}

impl core::fmt::Display for AmmConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "AmmConfig(native={}, fee={})", self.native_denom, self.fee_params)
    }
}
