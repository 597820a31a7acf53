//! Product price represented with decimal arithmetic.
//!
//! The catalog API sends prices as JSON numbers (`9.99`). They are read
//! into a [`Decimal`] so display never shows float noise.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product price in US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::new(Decimal::new(999, 2)).to_string(), "$9.99");
        assert_eq!(Price::new(Decimal::new(1500, 0)).to_string(), "$1500.00");
    }

    #[test]
    fn test_from_json_number() {
        let price: Price = serde_json::from_str("9.99").unwrap();
        assert_eq!(price.amount(), Decimal::new(999, 2));

        let whole: Price = serde_json::from_str("20").unwrap();
        assert_eq!(whole.amount(), Decimal::new(20, 0));
    }
}
