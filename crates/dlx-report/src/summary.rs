//! Scan summary aggregation.
//!
//! Counts analyzed tickers per severity bucket, collects per-ticker
//! errors, and renders the console summary block.

use chrono::{DateTime, Utc};
use dlx_core::Severity;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One failed ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub ticker: String,
    pub error: String,
}

/// Aggregate scan summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub run_at: DateTime<Utc>,
    pub tickers_analyzed: usize,
    pub critical_dislocations: usize,
    pub high_dislocations: usize,
    pub moderate_dislocations: usize,
    pub normal: usize,
    pub errors: Vec<ErrorEntry>,
}

impl Summary {
    /// Create an empty summary for a run starting at `run_at`.
    pub fn new(run_at: DateTime<Utc>) -> Self {
        Self {
            run_at,
            tickers_analyzed: 0,
            critical_dislocations: 0,
            high_dislocations: 0,
            moderate_dislocations: 0,
            normal: 0,
            errors: Vec::new(),
        }
    }

    /// Count one analyzed ticker in its severity bucket.
    pub fn record(&mut self, severity: Severity) {
        self.tickers_analyzed += 1;
        match severity {
            Severity::Critical => self.critical_dislocations += 1,
            Severity::High => self.high_dislocations += 1,
            Severity::Moderate => self.moderate_dislocations += 1,
            Severity::Normal => self.normal += 1,
        }
    }

    /// Record a ticker that could not be analyzed.
    pub fn record_error(&mut self, ticker: impl Into<String>, error: impl Into<String>) {
        self.errors.push(ErrorEntry {
            ticker: ticker.into(),
            error: error.into(),
        });
    }

    /// Whether any analyzed ticker classified CRITICAL.
    pub fn has_critical(&self) -> bool {
        self.critical_dislocations > 0
    }

    /// Render the console summary block.
    pub fn log_summary(&self) {
        info!("========== Dislocation Scan Summary ==========");
        info!("Run at: {}", self.run_at.format("%Y-%m-%d %H:%M:%S UTC"));
        info!("Tickers analyzed: {}", self.tickers_analyzed);
        info!(
            "  CRITICAL: {}, HIGH: {}, MODERATE: {}, NORMAL: {}",
            self.critical_dislocations,
            self.high_dislocations,
            self.moderate_dislocations,
            self.normal
        );
        if self.errors.is_empty() {
            info!("Errors: none");
        } else {
            info!("Errors: {}", self.errors.len());
            for entry in &self.errors {
                info!("  {} - {}", entry.ticker, entry.error);
            }
        }
        info!("==============================================");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_buckets() {
        let mut summary = Summary::new(Utc::now());
        summary.record(Severity::Critical);
        summary.record(Severity::Critical);
        summary.record(Severity::High);
        summary.record(Severity::Normal);

        assert_eq!(summary.tickers_analyzed, 4);
        assert_eq!(summary.critical_dislocations, 2);
        assert_eq!(summary.high_dislocations, 1);
        assert_eq!(summary.moderate_dislocations, 0);
        assert_eq!(summary.normal, 1);
        assert!(summary.has_critical());
    }

    #[test]
    fn test_errors_do_not_count_as_analyzed() {
        let mut summary = Summary::new(Utc::now());
        summary.record_error("NVDA", "no price data for NVDA");

        assert_eq!(summary.tickers_analyzed, 0);
        assert_eq!(summary.errors.len(), 1);
        assert!(!summary.has_critical());
    }

    #[test]
    fn test_summary_json_keys() {
        let summary = Summary::new(Utc::now());
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("runAt").is_some());
        assert!(json.get("tickersAnalyzed").is_some());
        assert!(json.get("criticalDislocations").is_some());
        assert!(json.get("errors").is_some());
    }
}
