//! Per-ticker price facts.
//!
//! `PriceFacts` is the immutable input record of one classification run.
//! It is constructed fresh per scan and never mutated afterwards.

use crate::error::{CoreError, Result};
use crate::Price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price inputs for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceFacts {
    /// Latest price.
    pub current_price: Price,
    /// Previous close.
    pub previous_price: Price,
    /// Historical peak, derived from the history (current price when the
    /// history is empty). Not forced to be >= current.
    pub peak_price: Price,
    /// Chronological closes. May be empty.
    pub price_history: Vec<Decimal>,
    /// Daily volume from the live overlay, when available.
    pub volume: Option<Decimal>,
}

impl PriceFacts {
    /// Build facts from current/previous prices and a close history.
    ///
    /// The peak is the maximum close in the history; with no history the
    /// current price stands in, which yields a zero drawdown.
    ///
    /// Fails with `InvalidPrice` when current or previous is not strictly
    /// positive (a zero previous close would divide by zero downstream),
    /// and with `InvalidHistory` when the history contains a non-positive
    /// close.
    pub fn new(
        current_price: Price,
        previous_price: Price,
        price_history: Vec<Decimal>,
        volume: Option<Decimal>,
    ) -> Result<Self> {
        if !current_price.is_positive() {
            return Err(CoreError::InvalidPrice(format!(
                "current price must be positive, got {current_price}"
            )));
        }
        if !previous_price.is_positive() {
            return Err(CoreError::InvalidPrice(format!(
                "previous price must be positive, got {previous_price}"
            )));
        }
        if let Some(bad) = price_history
            .iter()
            .find(|c| !c.is_sign_positive() || c.is_zero())
        {
            return Err(CoreError::InvalidHistory(format!(
                "non-positive close in history: {bad}"
            )));
        }

        let peak_price = price_history
            .iter()
            .copied()
            .max()
            .map(Price::new)
            .unwrap_or(current_price);

        Ok(Self {
            current_price,
            previous_price,
            peak_price,
            price_history,
            volume,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_peak_from_history() {
        let facts = PriceFacts::new(
            Price::new(dec!(55)),
            Price::new(dec!(55)),
            vec![dec!(80), dec!(100), dec!(60), dec!(55)],
            None,
        )
        .unwrap();
        assert_eq!(facts.peak_price, Price::new(dec!(100)));
    }

    #[test]
    fn test_empty_history_defaults_peak_to_current() {
        let facts =
            PriceFacts::new(Price::new(dec!(42)), Price::new(dec!(41)), vec![], None).unwrap();
        assert_eq!(facts.peak_price, Price::new(dec!(42)));
    }

    #[test]
    fn test_zero_previous_rejected() {
        let err = PriceFacts::new(Price::new(dec!(42)), Price::ZERO, vec![], None).unwrap_err();
        assert!(matches!(err, CoreError::InvalidPrice(_)));
    }

    #[test]
    fn test_negative_close_rejected() {
        let err = PriceFacts::new(
            Price::new(dec!(42)),
            Price::new(dec!(41)),
            vec![dec!(40), dec!(-1)],
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidHistory(_)));
    }

    #[test]
    fn test_peak_may_sit_below_current() {
        // Stale history is allowed; drawdown goes positive downstream.
        let facts = PriceFacts::new(
            Price::new(dec!(120)),
            Price::new(dec!(118)),
            vec![dec!(100), dec!(110)],
            None,
        )
        .unwrap();
        assert_eq!(facts.peak_price, Price::new(dec!(110)));
    }
}
