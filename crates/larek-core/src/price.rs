//! Prices in synapses.
//!
//! The storefront has a single integer currency. A product without a price
//! is not for sale; that absence is modelled as `Option<Price>` by callers,
//! never as a zero price.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Label shown for products that have no price.
pub const PRICELESS_LABEL: &str = "Priceless";

/// A non-fractional amount of synapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Sum optional prices, counting a missing price as zero.
    ///
    /// Saturates instead of overflowing.
    pub fn sum_optional<'a>(prices: impl IntoIterator<Item = &'a Option<Price>>) -> Price {
        prices
            .into_iter()
            .fold(Price::ZERO, |acc, p| acc + p.unwrap_or(Price::ZERO))
    }

    /// Format an optional price for display (e.g. "750 synapses" or "Priceless").
    pub fn label(price: Option<Price>) -> String {
        match price {
            Some(p) => p.to_string(),
            None => PRICELESS_LABEL.to_string(),
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl From<i64> for Price {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} synapses", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display() {
        assert_eq!(Price::new(750).to_string(), "750 synapses");
        assert_eq!(Price::label(Some(Price::new(0))), "0 synapses");
        assert_eq!(Price::label(None), "Priceless");
    }

    #[test]
    fn test_sum_optional_treats_none_as_zero() {
        let prices = [Some(Price::new(100)), None, Some(Price::new(2500))];
        assert_eq!(Price::sum_optional(&prices), Price::new(2600));
        assert_eq!(Price::sum_optional(std::iter::empty()), Price::ZERO);
        assert_eq!(Price::sum_optional(&[None, None]), Price::ZERO);
    }

    #[test]
    fn test_addition_saturates() {
        let big = Price::new(i64::MAX);
        assert_eq!(big + Price::new(1), big);
    }

    #[test]
    fn test_price_json_is_a_bare_integer() {
        let json = serde_json::to_string(&Some(Price::new(1450))).unwrap();
        assert_eq!(json, "1450");

        let missing: Option<Price> = serde_json::from_str("null").unwrap();
        assert_eq!(missing, None);
    }
}
