//! Rounding direction for integer division.

/// Direction in which an inexact integer division is rounded.
///
/// Every division in the pricing engine names its direction explicitly,
/// and the direction is always the one that favors the pool:
///
/// | Quantity | Direction |
/// |----------|-----------|
/// | amount paid out of the pool | [`Rounding::Down`] |
/// | amount paid into the pool   | [`Rounding::Up`]   |
///
/// # Examples
///
/// ```
/// use unipool::domain::Rounding;
///
/// assert_eq!(Rounding::for_payout(), Rounding::Down);
/// assert!(Rounding::for_payment().is_up());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Ceiling.
    Up,
    /// Floor.
    Down,
}

impl Rounding {
    /// Direction for amounts the pool pays out (floor).
    #[must_use]
    pub const fn for_payout() -> Self {
        Self::Down
    }

    /// Direction for amounts the pool collects (ceiling).
    #[must_use]
    pub const fn for_payment() -> Self {
        Self::Up
    }

    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}
