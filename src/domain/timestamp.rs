//! Block time and request deadlines.

use core::fmt;

/// Seconds since the Unix epoch.
///
/// Used both for the block time reported by the [`Clock`](crate::traits::Clock)
/// and for the deadline carried by every request.  A request is expired
/// once the block time is strictly after its deadline; a request executed
/// in the very second of its deadline is still valid.
///
/// # Examples
///
/// ```
/// use unipool::domain::Timestamp;
///
/// let deadline = Timestamp::from_secs(1_700_000_000);
/// assert!(Timestamp::from_secs(1_700_000_001).is_after(deadline));
/// assert!(!deadline.is_after(deadline));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch.
    pub const EPOCH: Self = Self(0);

    /// The far future; useful as a deadline that never expires.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a timestamp from seconds since the epoch.
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the seconds since the epoch.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns `true` if `self` is strictly later than `other`.
    #[must_use]
    pub const fn is_after(&self, other: Self) -> bool {
        self.0 > other.0
    }

    /// Returns a timestamp `secs` later, saturating at [`Timestamp::MAX`].
    #[must_use]
    pub const fn plus_secs(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn after_is_strict() {
        let t = Timestamp::from_secs(10);
        assert!(!t.is_after(t));
        assert!(t.plus_secs(1).is_after(t));
        assert!(!Timestamp::EPOCH.is_after(t));
    }

    #[test]
    fn plus_saturates() {
        assert_eq!(Timestamp::MAX.plus_secs(5), Timestamp::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(Timestamp::from_secs(42).to_string(), "42s");
    }
}
