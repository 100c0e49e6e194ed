//! Fee configuration collaborator.

use crate::domain::FeeParams;

/// Read-only access to the governed swap fee.
///
/// Fee governance lives outside the core; handlers only read the current
/// parameters once per operation, so a fee change never applies halfway
/// through a swap.
pub trait FeeSource {
    /// Returns the fee parameters in force.
    #[must_use]
    fn fee_params(&self) -> FeeParams;
}

impl FeeSource for FeeParams {
    fn fee_params(&self) -> FeeParams {
        *self
    }
}
