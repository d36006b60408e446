//! Report assembly.
//!
//! Iterates the selected tickers, runs classification, weight
//! derivation, and inference per ticker, and accumulates the summary. A
//! ticker whose facts cannot be built records an error entry; the batch
//! never aborts.

use crate::document::{MetricsBlock, ReportDocument, TickerReport};
use crate::summary::Summary;
use chrono::Utc;
use dlx_classifier::{
    ClassifierConfig, DislocationClassifier, HypothesisWeightGenerator, InferenceEngine,
};
use dlx_core::{Severity, Ticker};
use dlx_feed::FactsSource;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Batch report assembler.
pub struct ReportAssembler {
    classifier: DislocationClassifier,
    /// Minimum severity a ticker must reach to appear under `results`.
    /// The summary counts every analyzed ticker regardless.
    threshold: Severity,
}

impl ReportAssembler {
    /// Create an assembler with the given classifier config and report
    /// threshold.
    pub fn new(config: ClassifierConfig, threshold: Severity) -> Self {
        Self {
            classifier: DislocationClassifier::new(config),
            threshold,
        }
    }

    /// Run the batch over `tickers` and assemble the report document.
    pub fn assemble(&self, source: &FactsSource, tickers: &[Ticker]) -> ReportDocument {
        let run_at = Utc::now();
        let mut summary = Summary::new(run_at);
        let mut results = BTreeMap::new();

        for ticker in tickers {
            let facts = match source.facts_for(ticker) {
                Ok(facts) => facts,
                Err(e) => {
                    warn!(%ticker, error = %e, "Skipping ticker");
                    summary.record_error(ticker.as_str(), e.to_string());
                    continue;
                }
            };

            let result = self.classifier.classify(&facts);
            summary.record(result.severity);
            debug!(%ticker, severity = %result.severity, "Ticker analyzed");

            if !result.severity.meets(self.threshold) {
                continue;
            }

            results.insert(
                ticker.as_str().to_string(),
                TickerReport {
                    severity: result.severity,
                    metrics: MetricsBlock::from_analysis(&facts, &result),
                    pattern: result.pattern,
                    weights: HypothesisWeightGenerator::generate(result.severity),
                    inference: InferenceEngine::infer(result.severity),
                },
            );
        }

        ReportDocument {
            summary,
            results,
            generated_at: Utc::now(),
        }
    }
}
