//! Asset identifier.

use core::fmt;
use core::str::FromStr;

use crate::error::AmmError;

/// Minimum denom length.
const MIN_LEN: usize = 3;

/// Maximum denom length.
const MAX_LEN: usize = 128;

/// The symbol identifying an asset (e.g. `"atom"`, `"ibc/27394FB0"`).
///
/// A denom starts with an ASCII letter, is 3 to 128 characters long and
/// otherwise contains only ASCII alphanumerics or one of `/ : . _ -`.
/// Validation happens once at construction, so every `Denom` in the system
/// is well formed.
///
/// # Examples
///
/// ```
/// use unipool::domain::Denom;
///
/// let atom = Denom::new("atom").expect("valid denom");
/// assert_eq!(atom.as_str(), "atom");
/// assert!(Denom::new("1x").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Denom(String);

impl Denom {
    /// Creates a validated `Denom`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidDenom`] if the symbol is malformed.
    pub fn new(symbol: impl Into<String>) -> Result<Self, AmmError> {
        let symbol = symbol.into();
        if !Self::is_valid(&symbol) {
            return Err(AmmError::InvalidDenom(symbol));
        }
        Ok(Self(symbol))
    }

    /// Builds a denom from a compile-time constant known to be well formed.
    pub(crate) fn from_static(symbol: &'static str) -> Self {
        debug_assert!(Self::is_valid(symbol), "malformed built-in denom");
        Self(symbol.to_owned())
    }

    /// Returns the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_valid(symbol: &str) -> bool {
        let len = symbol.len();
        if !(MIN_LEN..=MAX_LEN).contains(&len) {
            return false;
        }
        let mut chars = symbol.chars();
        let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
        starts_with_letter
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '/' | ':' | '.' | '_' | '-'))
    }
}

impl FromStr for Denom {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Denom {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Denom> for String {
    fn from(value: Denom) -> Self {
        value.0
    }
}

impl AsRef<str> for Denom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Denom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_symbol() {
        assert!(Denom::new("atom").is_ok());
        assert!(Denom::new("uatom").is_ok());
    }

    #[test]
    fn accepts_path_like_symbol() {
        assert!(Denom::new("ibc/27394FB092D2ECCD").is_ok());
        assert!(Denom::new("factory/osmo1abc/sub-denom_1.x").is_ok());
    }

    #[test]
    fn rejects_too_short() {
        assert!(matches!(Denom::new("ab"), Err(AmmError::InvalidDenom(_))));
    }

    #[test]
    fn rejects_too_long() {
        let long = "a".repeat(MAX_LEN + 1);
        assert!(Denom::new(long).is_err());
        assert!(Denom::new("a".repeat(MAX_LEN)).is_ok());
    }

    #[test]
    fn rejects_leading_digit() {
        assert!(Denom::new("1atom").is_err());
    }

    #[test]
    fn rejects_whitespace_and_symbols() {
        assert!(Denom::new("at om").is_err());
        assert!(Denom::new("atom!").is_err());
        assert!(Denom::new("").is_err());
    }

    #[test]
    fn parse_and_display() {
        let Ok(denom) = "stake".parse::<Denom>() else {
            panic!("expected valid denom");
        };
        assert_eq!(denom.to_string(), "stake");
        assert_eq!(String::from(denom), "stake");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let (Ok(a), Ok(b)) = (Denom::new("aaa"), Denom::new("bbb")) else {
            panic!("expected valid denoms");
        };
        assert!(a < b);
    }
}
