//! Application configuration.

use crate::error::{AppError, AppResult};
use dlx_classifier::ClassifierConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Input data file locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Price-history snapshot (JSON, ticker -> chronological closes).
    #[serde(default = "default_history_path")]
    pub history_path: String,
    /// Live-quote overlay (JSON, ticker -> {p, pc, v}). Optional.
    #[serde(default)]
    pub quotes_path: Option<String>,
    /// Ticker universe (TOML, ticker -> static characteristics).
    #[serde(default = "default_universe_path")]
    pub universe_path: String,
}

fn default_history_path() -> String {
    "data/price_history.json".to_string()
}

fn default_universe_path() -> String {
    "config/universe.toml".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            quotes_path: None,
            universe_path: default_universe_path(),
        }
    }
}

/// Report output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report file path, unless overridden with `--output`.
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

fn default_report_path() -> String {
    "reports/dislocation_report.json".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
        }
    }
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input data files.
    #[serde(default)]
    pub data: DataConfig,
    /// Report output.
    #[serde(default)]
    pub output: OutputConfig,
    /// Classifier thresholds.
    #[serde(default)]
    pub classifier: ClassifierConfig,
    /// Telemetry configuration.
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// Path resolution: explicit argument > `DLX_CONFIG` env var >
    /// `config/default.toml`.
    pub fn load(explicit_path: Option<&str>) -> AppResult<Self> {
        let config_path = explicit_path
            .map(str::to_string)
            .or_else(|| std::env::var("DLX_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if Path::new(&config_path).exists() {
            Self::from_file(&config_path)
        } else {
            tracing::warn!(path = %config_path, "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load from a specific file.
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
