//! Ticker identification.
//!
//! A ticker symbol is the primary key for everything in a scan: price
//! history, live quotes, universe characteristics, and report results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock ticker symbol, stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_uppercased() {
        assert_eq!(Ticker::new("aapl").as_str(), "AAPL");
        assert_eq!(Ticker::new(" msft ").as_str(), "MSFT");
    }

    #[test]
    fn test_ticker_display() {
        assert_eq!(Ticker::new("BRK.B").to_string(), "BRK.B");
    }
}
