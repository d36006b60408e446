//! Core domain types for the dislocation severity scanner.
//!
//! This crate provides fundamental types used throughout the scanner:
//! - `Ticker`: Stock symbol, the primary key of a scan
//! - `Price`: Precision-safe price type
//! - `Severity`, `Pattern`: Classification enums
//! - `PriceFacts`: Immutable per-ticker price inputs

pub mod decimal;
pub mod error;
pub mod facts;
pub mod severity;
pub mod ticker;

pub use decimal::{round_pct, Price};
pub use error::{CoreError, Result};
pub use facts::PriceFacts;
pub use severity::{Pattern, Severity};
pub use ticker::Ticker;
