//! Dislocation classifier implementation.
//!
//! Classifies a ticker's price facts into a severity bucket from two
//! metrics: the daily return and the drawdown from the historical peak.
//! Pure and deterministic: identical facts always produce an identical
//! result.

use crate::config::ClassifierConfig;
use dlx_core::{round_pct, Pattern, PriceFacts, Severity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Classification output for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DislocationResult {
    /// Severity bucket.
    pub severity: Severity,
    /// Daily return in percent, 2 decimal places.
    pub today_return_pct: Decimal,
    /// Drawdown from peak in percent, 1 decimal place. Positive when the
    /// current price sits above a stale peak.
    pub drawdown_pct: Decimal,
    /// Price-action pattern.
    pub pattern: Pattern,
}

/// Dislocation severity classifier.
///
/// Rungs are evaluated top-down, first match wins, all comparisons strict:
/// - CRITICAL: `|return| > critical_return_pct` OR `drawdown < critical_drawdown_pct`
/// - HIGH: `|return| > high_return_pct` OR `drawdown < high_drawdown_pct`
/// - MODERATE: `|return| > moderate_return_pct`
/// - NORMAL otherwise
pub struct DislocationClassifier {
    config: ClassifierConfig,
}

impl DislocationClassifier {
    /// Create a new classifier with configuration.
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classify price facts into a dislocation result.
    ///
    /// `previous_price` is validated positive at `PriceFacts` construction,
    /// so the return is always defined. The peak defaults to the current
    /// price on an empty history, so the drawdown is always defined too.
    pub fn classify(&self, facts: &PriceFacts) -> DislocationResult {
        let raw_return = facts
            .current_price
            .pct_change_from(facts.previous_price)
            .unwrap_or(Decimal::ZERO);
        let today_return_pct = round_pct(raw_return, 2);

        let raw_drawdown = facts
            .current_price
            .pct_change_from(facts.peak_price)
            .unwrap_or(Decimal::ZERO);
        let drawdown_pct = round_pct(raw_drawdown, 1);

        let severity = self.severity_for(today_return_pct, drawdown_pct);
        let pattern = Self::pattern_for(severity, today_return_pct);

        if severity >= Severity::High {
            info!(
                %severity,
                return_pct = %today_return_pct,
                drawdown_pct = %drawdown_pct,
                ?pattern,
                "Dislocation detected"
            );
        }

        DislocationResult {
            severity,
            today_return_pct,
            drawdown_pct,
            pattern,
        }
    }

    fn severity_for(&self, today_return_pct: Decimal, drawdown_pct: Decimal) -> Severity {
        let abs_return = today_return_pct.abs();

        if abs_return > self.config.critical_return_pct
            || drawdown_pct < self.config.critical_drawdown_pct
        {
            Severity::Critical
        } else if abs_return > self.config.high_return_pct
            || drawdown_pct < self.config.high_drawdown_pct
        {
            Severity::High
        } else if abs_return > self.config.moderate_return_pct {
            Severity::Moderate
        } else {
            Severity::Normal
        }
    }

    fn pattern_for(severity: Severity, today_return_pct: Decimal) -> Pattern {
        match severity {
            Severity::Critical => Pattern::Distribution,
            Severity::High if today_return_pct.is_sign_negative() => Pattern::GapDown,
            _ => Pattern::Normal,
        }
    }

    /// Get current configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }
}
