//! Per-ticker facts assembly.
//!
//! Combines the price-history snapshot with the live-quote overlay into
//! `PriceFacts`. The overlay wins for current/previous prices when
//! present; the history always supplies the peak.

use crate::error::{FeedError, FeedResult};
use crate::parser::{self, HistoryMap, QuoteMap};
use dlx_core::{Price, PriceFacts, Ticker};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Source of price facts for a scan.
#[derive(Debug, Default)]
pub struct FactsSource {
    history: HistoryMap,
    quotes: QuoteMap,
}

impl FactsSource {
    /// Create a source from already-parsed inputs.
    pub fn new(history: HistoryMap, quotes: QuoteMap) -> Self {
        Self { history, quotes }
    }

    /// Load a source from the snapshot file and an optional overlay file.
    pub fn load(history_path: &Path, quotes_path: Option<&Path>) -> FeedResult<Self> {
        let history = parser::load_history(history_path)?;
        let quotes = match quotes_path {
            Some(path) => parser::load_quotes(path)?,
            None => HashMap::new(),
        };

        info!(
            history_tickers = history.len(),
            quote_tickers = quotes.len(),
            "Loaded price data"
        );

        Ok(Self { history, quotes })
    }

    /// Build price facts for one ticker.
    ///
    /// - Ticker in the overlay: `p`/`pc` supply current/previous, the
    ///   history (possibly empty) supplies the peak, `v` the volume.
    /// - Ticker only in the history: the last two closes supply
    ///   current/previous; fewer than two closes is invalid data.
    /// - Ticker in neither source: `MissingData`.
    pub fn facts_for(&self, ticker: &Ticker) -> FeedResult<PriceFacts> {
        let closes = self.history.get(ticker.as_str());

        if let Some(quote) = self.quotes.get(ticker.as_str()) {
            let history = closes.cloned().unwrap_or_default();
            return PriceFacts::new(
                Price::new(quote.current),
                Price::new(quote.prev_close),
                history,
                quote.volume,
            )
            .map_err(|e| FeedError::InvalidData(format!("{ticker}: {e}")));
        }

        let closes = closes
            .ok_or_else(|| FeedError::MissingData(format!("no price data for {ticker}")))?;

        if closes.len() < 2 {
            return Err(FeedError::InvalidData(format!(
                "{ticker}: need at least two closes to derive a return, got {}",
                closes.len()
            )));
        }

        let current = Price::new(closes[closes.len() - 1]);
        let previous = Price::new(closes[closes.len() - 2]);

        PriceFacts::new(current, previous, closes.clone(), None)
            .map_err(|e| FeedError::InvalidData(format!("{ticker}: {e}")))
    }
}
