//! Structured logging for the dislocation scanner.
//!
//! JSON output in production, pretty output in development.

pub mod error;
pub mod logging;

pub use error::{TelemetryError, TelemetryResult};
pub use logging::init_logging;
