//! Precision-safe price type.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, so the report
//! roundings (two decimals for the daily return, one for the drawdown)
//! are exact rather than float-approximate.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// Price with exact decimal precision.
///
/// Wraps `Decimal` to provide type safety and keep raw closes,
/// percentages, and weights from mixing silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub Decimal);

impl Price {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Percentage change from another price: `(self - other) / other * 100`.
    ///
    /// Returns None when the reference price is zero.
    #[inline]
    pub fn pct_change_from(&self, other: Price) -> Option<Decimal> {
        if other.is_zero() {
            return None;
        }
        Some((self.0 - other.0) / other.0 * Decimal::from(100))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<Decimal> for Price {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Round a percentage to `dp` decimal places, midpoint away from zero,
/// keeping exactly `dp` digits of scale so serialized values read
/// "0.00" / "-45.0" rather than "0" / "-45".
pub fn round_pct(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pct_change() {
        let current = Price::new(dec!(92));
        let previous = Price::new(dec!(100));

        let pct = current.pct_change_from(previous).unwrap();
        assert_eq!(pct, dec!(-8));
    }

    #[test]
    fn test_pct_change_zero_reference() {
        let current = Price::new(dec!(92));
        assert!(current.pct_change_from(Price::ZERO).is_none());
    }

    #[test]
    fn test_round_pct_scale() {
        assert_eq!(round_pct(dec!(-8), 2).to_string(), "-8.00");
        assert_eq!(round_pct(dec!(0), 2).to_string(), "0.00");
        assert_eq!(round_pct(dec!(-45.04), 1).to_string(), "-45.0");
    }

    #[test]
    fn test_round_pct_midpoint_away_from_zero() {
        assert_eq!(round_pct(dec!(2.005), 2), dec!(2.01));
        assert_eq!(round_pct(dec!(-2.005), 2), dec!(-2.01));
    }
}
