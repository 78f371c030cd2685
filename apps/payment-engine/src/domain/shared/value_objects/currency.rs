//! Currency code value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::PaymentError;

/// A 3-letter ISO 4217 currency code (e.g., "USD").
///
/// Construction enforces the exactly-3-characters invariant and
/// normalizes to uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Create a currency code, validating length and normalizing case.
    ///
    /// # Errors
    ///
    /// Returns error unless the code is exactly 3 ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Result<Self, PaymentError> {
        let code = code.as_ref().trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PaymentError::validation(
                "currency",
                "must be a 3-letter currency code",
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Get the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for Currency {
    type Error = PaymentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_code_uppercased() {
        let c = Currency::new("usd").unwrap();
        assert_eq!(c.as_str(), "USD");
    }

    #[test]
    fn too_short_rejected() {
        assert!(Currency::new("US").is_err());
    }

    #[test]
    fn too_long_rejected() {
        assert!(Currency::new("USDX").is_err());
    }

    #[test]
    fn non_alphabetic_rejected() {
        assert!(Currency::new("U5D").is_err());
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let c = Currency::new(" EUR ").unwrap();
        assert_eq!(c.as_str(), "EUR");
    }

    #[test]
    fn display_and_try_from() {
        let c = Currency::try_from("INR").unwrap();
        assert_eq!(format!("{c}"), "INR");
    }
}
