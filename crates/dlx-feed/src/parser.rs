//! Input file parsing.
//!
//! Two JSON inputs feed a scan:
//! - Price-history snapshot: `{"AAPL": [181.5, 183.2, ...], ...}`,
//!   chronological closes per ticker.
//! - Live-quote overlay: `{"AAPL": {"p": 184.1, "pc": 183.2, "v": 5400100}}`
//!   with the upstream's short field names (current price, previous
//!   close, volume).

use crate::error::FeedResult;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Chronological closes keyed by ticker symbol.
pub type HistoryMap = HashMap<String, Vec<Decimal>>;

/// Live quotes keyed by ticker symbol.
pub type QuoteMap = HashMap<String, LiveQuote>;

/// Live quote for one ticker.
///
/// Field names follow the upstream snapshot format.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveQuote {
    /// Current price.
    #[serde(rename = "p")]
    pub current: Decimal,
    /// Previous close.
    #[serde(rename = "pc")]
    pub prev_close: Decimal,
    /// Daily volume.
    #[serde(rename = "v", default)]
    pub volume: Option<Decimal>,
}

/// Parse a price-history snapshot from JSON text.
pub fn parse_history(content: &str) -> FeedResult<HistoryMap> {
    let history: HistoryMap = serde_json::from_str(content)?;
    debug!(tickers = history.len(), "Parsed price-history snapshot");
    Ok(history)
}

/// Load a price-history snapshot from a file.
pub fn load_history(path: &Path) -> FeedResult<HistoryMap> {
    parse_history(&std::fs::read_to_string(path)?)
}

/// Parse a live-quote overlay from JSON text.
pub fn parse_quotes(content: &str) -> FeedResult<QuoteMap> {
    let quotes: QuoteMap = serde_json::from_str(content)?;
    debug!(tickers = quotes.len(), "Parsed live-quote overlay");
    Ok(quotes)
}

/// Load a live-quote overlay from a file.
pub fn load_quotes(path: &Path) -> FeedResult<QuoteMap> {
    parse_quotes(&std::fs::read_to_string(path)?)
}
