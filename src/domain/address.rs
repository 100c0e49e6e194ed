//! Holder identity.

use core::fmt;

use crate::error::AmmError;

/// The address of an account that can hold assets and claim tokens.
///
/// The core never interprets the address (signature checks and encoding
/// belong to the host chain); it only requires it to be non-empty and free
/// of whitespace so it can serve as a stable map key.
///
/// # Examples
///
/// ```
/// use unipool::domain::Address;
///
/// let alice = Address::new("cosmos1alice").expect("valid address");
/// assert_eq!(alice.as_str(), "cosmos1alice");
/// assert!(Address::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Address(String);

impl Address {
    /// Creates a validated `Address`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAddress`] if `value` is empty or contains
    /// whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, AmmError> {
        let value = value.into();
        if value.is_empty() || value.chars().any(char::is_whitespace) {
            return Err(AmmError::InvalidAddress(value));
        }
        Ok(Self(value))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Address {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address() {
        let addr = Address::new("cosmos1xyz");
        assert!(addr.is_ok());
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(Address::new(""), Err(AmmError::InvalidAddress(_))));
    }

    #[test]
    fn whitespace_rejected() {
        assert!(Address::new("cosmos1 xyz").is_err());
        assert!(Address::new("cosmos1xyz\n").is_err());
    }

    #[test]
    fn equality_by_value() {
        assert_eq!(Address::new("a1").ok(), Address::new("a1").ok());
        assert_ne!(Address::new("a1").ok(), Address::new("a2").ok());
    }
}
