//! Hypothesis weight derivation.
//!
//! Each hypothesis tag carries a fixed long-term baseline weight and a
//! severity-dependent short-term weight. The blended weight is the exact
//! midpoint of the two, so it always lies inside the closed interval they
//! span.

use dlx_core::{round_pct, Severity};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hypothesis tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HypothesisTag {
    T1,
    T2,
    T3,
    T4,
}

impl HypothesisTag {
    pub const ALL: [Self; 4] = [Self::T1, Self::T2, Self::T3, Self::T4];

    /// Fixed long-term baseline weight for this tag.
    pub fn long_term_baseline(&self) -> Decimal {
        match self {
            Self::T1 => Decimal::from(60),
            Self::T2 => Decimal::from(35),
            Self::T3 => Decimal::from(20),
            Self::T4 => Decimal::from(50),
        }
    }

    /// Short-term weight this tag converges to under CRITICAL severity.
    /// T2/T3 rise sharply toward divergence, T1/T4 fall away.
    fn divergence_target(&self) -> Decimal {
        match self {
            Self::T1 => Decimal::from(40),
            Self::T2 => Decimal::from(75),
            Self::T3 => Decimal::from(65),
            Self::T4 => Decimal::from(20),
        }
    }
}

impl fmt::Display for HypothesisTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::T1 => write!(f, "T1"),
            Self::T2 => write!(f, "T2"),
            Self::T3 => write!(f, "T3"),
            Self::T4 => write!(f, "T4"),
        }
    }
}

/// Confidence level attached to a weight record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Derived weights for one hypothesis tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightRecord {
    /// Fixed baseline.
    pub long_term: Decimal,
    /// Severity-shifted weight, 1 decimal place.
    pub short_term: Decimal,
    /// Midpoint of long and short term, 1 decimal place.
    pub blended: Decimal,
    /// Confidence in the short-term shift.
    pub confidence: Confidence,
}

/// Weight records for all four tags, serialized under their tag names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HypothesisWeights {
    #[serde(rename = "T1")]
    pub t1: WeightRecord,
    #[serde(rename = "T2")]
    pub t2: WeightRecord,
    #[serde(rename = "T3")]
    pub t3: WeightRecord,
    #[serde(rename = "T4")]
    pub t4: WeightRecord,
}

impl HypothesisWeights {
    /// Get the record for a tag.
    pub fn get(&self, tag: HypothesisTag) -> &WeightRecord {
        match tag {
            HypothesisTag::T1 => &self.t1,
            HypothesisTag::T2 => &self.t2,
            HypothesisTag::T3 => &self.t3,
            HypothesisTag::T4 => &self.t4,
        }
    }

    /// Iterate records in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (HypothesisTag, &WeightRecord)> + '_ {
        HypothesisTag::ALL.iter().map(move |t| (*t, self.get(*t)))
    }
}

/// Hypothesis weight generator.
///
/// Short-term weights interpolate between the baseline and the tag's
/// divergence target by a severity shift factor:
/// NORMAL=0, MODERATE=0.25, HIGH=0.5, CRITICAL=1.
pub struct HypothesisWeightGenerator;

impl HypothesisWeightGenerator {
    /// Severity shift factor applied to the baseline-to-target distance.
    fn shift_factor(severity: Severity) -> Decimal {
        match severity {
            Severity::Normal => Decimal::ZERO,
            Severity::Moderate => Decimal::new(25, 2),
            Severity::High => Decimal::new(5, 1),
            Severity::Critical => Decimal::ONE,
        }
    }

    fn confidence_for(tag: HypothesisTag, severity: Severity) -> Confidence {
        if severity != Severity::Critical {
            return Confidence::Medium;
        }
        match tag {
            HypothesisTag::T2 | HypothesisTag::T3 => Confidence::High,
            HypothesisTag::T4 => Confidence::Low,
            HypothesisTag::T1 => Confidence::Medium,
        }
    }

    fn record_for(tag: HypothesisTag, severity: Severity) -> WeightRecord {
        let long_term = tag.long_term_baseline();
        let factor = Self::shift_factor(severity);
        let short_term = round_pct(long_term + (tag.divergence_target() - long_term) * factor, 1);
        let blended = round_pct((long_term + short_term) / Decimal::TWO, 1);

        WeightRecord {
            long_term,
            short_term,
            blended,
            confidence: Self::confidence_for(tag, severity),
        }
    }

    /// Generate all four weight records for a severity.
    pub fn generate(severity: Severity) -> HypothesisWeights {
        HypothesisWeights {
            t1: Self::record_for(HypothesisTag::T1, severity),
            t2: Self::record_for(HypothesisTag::T2, severity),
            t3: Self::record_for(HypothesisTag::T3, severity),
            t4: Self::record_for(HypothesisTag::T4, severity),
        }
    }
}
