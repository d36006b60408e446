//! Input acquisition for the dislocation scanner.
//!
//! Combines three externally-supplied files into per-ticker `PriceFacts`:
//! a price-history snapshot (JSON), an optional live-quote overlay (JSON),
//! and the ticker universe (TOML).

pub mod error;
pub mod parser;
pub mod snapshot;
pub mod universe;

pub use error::{FeedError, FeedResult};
pub use parser::{HistoryMap, LiveQuote, QuoteMap};
pub use snapshot::FactsSource;
pub use universe::{TickerInfo, Universe};
