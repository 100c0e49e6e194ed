//! Block-time collaborator.
//!
//! The core never reads the system clock.  The host supplies the time of
//! the block being executed through [`Clock`], which keeps every handler
//! deterministic: replaying the same block with the same store produces
//! the same result.

use crate::domain::Timestamp;

/// Source of the current block time.
///
/// # Deadline Semantics
///
/// A request whose deadline equals the block time is still valid; it
/// expires only once the block time is strictly after the deadline.
pub trait Clock {
    /// Returns the time of the block being executed.
    #[must_use]
    fn block_time(&self) -> Timestamp;

    /// Returns `true` if the block time is strictly after `deadline`.
    #[must_use]
    fn is_after(&self, deadline: Timestamp) -> bool {
        self.block_time().is_after(deadline)
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn block_time(&self) -> Timestamp {
        (**self).block_time()
    }
}
