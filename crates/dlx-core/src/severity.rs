//! Severity and pattern classification enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dislocation severity bucket.
///
/// Ordered: NORMAL < MODERATE < HIGH < CRITICAL. The derived `Ord`
/// follows declaration order and backs threshold filtering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// No abnormal move.
    #[default]
    Normal,
    /// Noticeable but unremarkable move.
    Moderate,
    /// Large single-day move or deep drawdown.
    High,
    /// Extreme move or severe drawdown.
    Critical,
}

impl Severity {
    /// Check whether this severity reaches the given reporting threshold.
    pub fn meets(&self, threshold: Severity) -> bool {
        *self >= threshold
    }

    /// Check whether this severity is CRITICAL (drives the exit code).
    pub fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NORMAL" => Ok(Self::Normal),
            "MODERATE" => Ok(Self::Moderate),
            "HIGH" => Ok(Self::High),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(format!("unknown severity: {other}")),
        }
    }
}

/// Price-action pattern attached to a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Pattern {
    /// No distinctive pattern.
    Normal,
    /// Sharp negative single-day move.
    GapDown,
    /// Critical-severity move, return sign irrelevant.
    Distribution,
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::GapDown => write!(f, "GAP_DOWN"),
            Self::Distribution => write!(f, "DISTRIBUTION"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Normal < Severity::Moderate);
        assert!(Severity::Moderate < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_severity_meets_threshold() {
        assert!(Severity::Critical.meets(Severity::High));
        assert!(Severity::High.meets(Severity::High));
        assert!(!Severity::Moderate.meets(Severity::High));
        assert!(Severity::Normal.meets(Severity::Normal));
    }

    #[test]
    fn test_severity_parse() {
        assert_eq!("critical".parse::<Severity>().unwrap(), Severity::Critical);
        assert_eq!("MODERATE".parse::<Severity>().unwrap(), Severity::Moderate);
        assert!("extreme".parse::<Severity>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
        assert_eq!(Pattern::GapDown.to_string(), "GAP_DOWN");
        assert_eq!(Pattern::Distribution.to_string(), "DISTRIBUTION");
    }
}
