//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] dlx_core::CoreError),

    #[error("Feed error: {0}")]
    Feed(#[from] dlx_feed::FeedError),

    #[error("Report error: {0}")]
    Report(#[from] dlx_report::ReportError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] dlx_telemetry::TelemetryError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
