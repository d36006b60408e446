//! Ticker universe configuration.
//!
//! The universe file is an explicit TOML mapping from ticker to static
//! characteristics. It defines the "all" ticker selection and replaces
//! any scraped or global configuration source.
//!
//! ```toml
//! [tickers.AAPL]
//! name = "Apple Inc."
//! sector = "Technology"
//! ```

use crate::error::FeedResult;
use dlx_core::Ticker;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// Static characteristics of one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerInfo {
    /// Company name.
    pub name: String,
    /// Sector label, when known.
    #[serde(default)]
    pub sector: Option<String>,
}

/// Configured ticker universe.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Universe {
    #[serde(default)]
    tickers: BTreeMap<String, TickerInfo>,
}

impl Universe {
    /// Parse a universe from TOML text.
    pub fn from_toml(content: &str) -> FeedResult<Self> {
        let universe: Self = toml::from_str(content)?;
        debug!(tickers = universe.len(), "Parsed ticker universe");
        Ok(universe)
    }

    /// Load a universe from a file.
    pub fn from_file(path: &Path) -> FeedResult<Self> {
        Self::from_toml(&std::fs::read_to_string(path)?)
    }

    /// Get characteristics for a ticker.
    pub fn get(&self, ticker: &Ticker) -> Option<&TickerInfo> {
        self.tickers.get(ticker.as_str())
    }

    /// Check whether a ticker is configured.
    pub fn contains(&self, ticker: &Ticker) -> bool {
        self.tickers.contains_key(ticker.as_str())
    }

    /// All configured tickers, sorted.
    pub fn symbols(&self) -> Vec<Ticker> {
        self.tickers.keys().map(|s| Ticker::new(s)).collect()
    }

    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[tickers.AAPL]
name = "Apple Inc."
sector = "Technology"

[tickers.XOM]
name = "Exxon Mobil"
"#;

    #[test]
    fn test_parse_universe() {
        let universe = Universe::from_toml(SAMPLE).unwrap();
        assert_eq!(universe.len(), 2);

        let aapl = universe.get(&Ticker::new("AAPL")).unwrap();
        assert_eq!(aapl.name, "Apple Inc.");
        assert_eq!(aapl.sector.as_deref(), Some("Technology"));

        let xom = universe.get(&Ticker::new("XOM")).unwrap();
        assert!(xom.sector.is_none());
    }

    #[test]
    fn test_symbols_sorted() {
        let universe = Universe::from_toml(SAMPLE).unwrap();
        assert_eq!(
            universe.symbols(),
            vec![Ticker::new("AAPL"), Ticker::new("XOM")]
        );
    }

    #[test]
    fn test_empty_universe() {
        let universe = Universe::from_toml("").unwrap();
        assert!(universe.is_empty());
        assert!(!universe.contains(&Ticker::new("AAPL")));
    }
}
