//! Settable block clock.

use crate::domain::Timestamp;
use crate::traits::Clock;

/// A [`Clock`] whose block time is set by the host.
///
/// # Examples
///
/// ```
/// use unipool::domain::Timestamp;
/// use unipool::host::ManualClock;
/// use unipool::traits::Clock;
///
/// let mut clock = ManualClock::new(Timestamp::from_secs(10));
/// clock.advance(5);
/// assert_eq!(clock.block_time(), Timestamp::from_secs(15));
/// assert!(clock.is_after(Timestamp::from_secs(14)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManualClock {
    now: Timestamp,
}

impl ManualClock {
    /// Creates a clock reading `now`.
    #[must_use]
    pub const fn new(now: Timestamp) -> Self {
        Self { now }
    }

    /// Moves the clock to `now`.
    pub fn set(&mut self, now: Timestamp) {
        self.now = now;
    }

    /// Moves the clock forward by `secs`, saturating at [`Timestamp::MAX`].
    pub fn advance(&mut self, secs: u64) {
        self.now = self.now.plus_secs(secs);
    }
}

impl Clock for ManualClock {
    fn block_time(&self) -> Timestamp {
        self.now
    }
}
