//! Construction from a validated configuration.
//!
//! [`FromConfig`] gives the pool store and the exchange a uniform way to
//! be built from an [`AmmConfig`](crate::config::AmmConfig).  Implementors
//! must validate the configuration first; a successfully constructed value
//! is always in a valid initial state.

use crate::error::AmmError;

/// Builds `Self` from a configuration value.
///
/// # Errors
///
/// Returns the configuration's validation error, such as
/// [`AmmError::InvalidFee`].
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Propagates the configuration's validation error.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
