//! Hypothesis inference.
//!
//! Maps a severity bucket to the primary, secondary, and contradicted
//! hypothesis tags with an overall confidence score.

use crate::weights::HypothesisTag;
use dlx_core::Severity;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inferred hypothesis ranking for one ticker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inference {
    pub primary_hypothesis: HypothesisTag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_hypothesis: Option<HypothesisTag>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contradicted_hypothesis: Option<HypothesisTag>,
    /// Confidence in [0, 1].
    pub confidence: Decimal,
}

/// Severity-to-hypothesis inference engine.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Infer the hypothesis ranking for a severity.
    ///
    /// CRITICAL promotes the divergence hypotheses (T2/T3) and marks T4
    /// contradicted; everything else defaults to T1 at lower confidence.
    pub fn infer(severity: Severity) -> Inference {
        match severity {
            Severity::Critical => Inference {
                primary_hypothesis: HypothesisTag::T2,
                secondary_hypothesis: Some(HypothesisTag::T3),
                contradicted_hypothesis: Some(HypothesisTag::T4),
                confidence: Decimal::new(85, 2),
            },
            _ => Inference {
                primary_hypothesis: HypothesisTag::T1,
                secondary_hypothesis: None,
                contradicted_hypothesis: None,
                confidence: Decimal::new(6, 1),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_critical_inference() {
        let inference = InferenceEngine::infer(Severity::Critical);
        assert_eq!(inference.primary_hypothesis, HypothesisTag::T2);
        assert_eq!(inference.secondary_hypothesis, Some(HypothesisTag::T3));
        assert_eq!(inference.contradicted_hypothesis, Some(HypothesisTag::T4));
        assert_eq!(inference.confidence, dec!(0.85));
    }

    #[test]
    fn test_non_critical_inference() {
        for severity in [Severity::Normal, Severity::Moderate, Severity::High] {
            let inference = InferenceEngine::infer(severity);
            assert_eq!(inference.primary_hypothesis, HypothesisTag::T1);
            assert!(inference.secondary_hypothesis.is_none());
            assert!(inference.contradicted_hypothesis.is_none());
            assert_eq!(inference.confidence, dec!(0.6));
        }
    }

    #[test]
    fn test_confidence_in_unit_interval() {
        for severity in [
            Severity::Normal,
            Severity::Moderate,
            Severity::High,
            Severity::Critical,
        ] {
            let c = InferenceEngine::infer(severity).confidence;
            assert!(c >= Decimal::ZERO && c <= Decimal::ONE);
        }
    }
}
