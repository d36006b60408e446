//! Report document types.
//!
//! The outward-facing JSON shape, camelCase throughout:
//! `{ summary: {...}, results: { <ticker>: {...} }, generatedAt }`.

use crate::summary::Summary;
use chrono::{DateTime, Utc};
use dlx_classifier::{DislocationResult, HypothesisWeights, Inference};
use dlx_core::{Pattern, PriceFacts, Severity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Price metrics echoed into the report for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBlock {
    pub current_price: Decimal,
    pub previous_price: Decimal,
    pub peak_price: Decimal,
    pub today_return_pct: Decimal,
    pub drawdown_pct: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<Decimal>,
}

impl MetricsBlock {
    /// Build the metrics block from facts and their classification.
    pub fn from_analysis(facts: &PriceFacts, result: &DislocationResult) -> Self {
        Self {
            current_price: facts.current_price.inner(),
            previous_price: facts.previous_price.inner(),
            peak_price: facts.peak_price.inner(),
            today_return_pct: result.today_return_pct,
            drawdown_pct: result.drawdown_pct,
            volume: facts.volume,
        }
    }
}

/// Full analysis result for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    pub severity: Severity,
    pub metrics: MetricsBlock,
    pub pattern: Pattern,
    pub weights: HypothesisWeights,
    pub inference: Inference,
}

/// The complete report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDocument {
    pub summary: Summary,
    /// Per-ticker results, keyed by symbol. BTreeMap keeps the output
    /// deterministically ordered.
    pub results: BTreeMap<String, TickerReport>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use dlx_classifier::{
        ClassifierConfig, DislocationClassifier, HypothesisWeightGenerator, InferenceEngine,
    };
    use dlx_core::Price;
    use rust_decimal_macros::dec;

    fn sample_report() -> TickerReport {
        let facts = PriceFacts::new(
            Price::new(dec!(55)),
            Price::new(dec!(55)),
            vec![dec!(100), dec!(55)],
            Some(dec!(12000)),
        )
        .unwrap();
        let result = DislocationClassifier::new(ClassifierConfig::default()).classify(&facts);
        TickerReport {
            severity: result.severity,
            metrics: MetricsBlock::from_analysis(&facts, &result),
            pattern: result.pattern,
            weights: HypothesisWeightGenerator::generate(result.severity),
            inference: InferenceEngine::infer(result.severity),
        }
    }

    #[test]
    fn test_report_json_shape() {
        let json = serde_json::to_value(sample_report()).unwrap();

        assert_eq!(json["severity"], "CRITICAL");
        assert_eq!(json["pattern"], "DISTRIBUTION");
        assert_eq!(json["metrics"]["todayReturnPct"], "0.00");
        assert_eq!(json["metrics"]["drawdownPct"], "-45.0");
        assert!(json["weights"]["T2"]["shortTerm"].is_string());
        assert_eq!(json["weights"]["T2"]["confidence"], "HIGH");
        assert_eq!(json["inference"]["primaryHypothesis"], "T2");
        assert_eq!(json["inference"]["secondaryHypothesis"], "T3");
        assert_eq!(json["inference"]["contradictedHypothesis"], "T4");
    }

    #[test]
    fn test_normal_inference_omits_null_hypotheses() {
        let inference = InferenceEngine::infer(Severity::Normal);
        let json = serde_json::to_value(inference).unwrap();
        assert!(json.get("secondaryHypothesis").is_none());
        assert!(json.get("contradictedHypothesis").is_none());
    }

    #[test]
    fn test_document_round_trip() {
        let mut results = BTreeMap::new();
        results.insert("AAPL".to_string(), sample_report());
        let doc = ReportDocument {
            summary: Summary::new(Utc::now()),
            results,
            generated_at: Utc::now(),
        };

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.results["AAPL"], doc.results["AAPL"]);
    }
}
