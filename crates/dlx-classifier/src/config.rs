//! Classifier configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Severity thresholds for dislocation classification.
///
/// Return thresholds compare against `|todayReturnPct|` with strict `>`;
/// drawdown thresholds compare against `drawdownPct` with strict `<`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Absolute daily return (%) above which severity is CRITICAL.
    #[serde(default = "default_critical_return_pct")]
    pub critical_return_pct: Decimal,
    /// Drawdown (%) below which severity is CRITICAL.
    #[serde(default = "default_critical_drawdown_pct")]
    pub critical_drawdown_pct: Decimal,
    /// Absolute daily return (%) above which severity is HIGH.
    #[serde(default = "default_high_return_pct")]
    pub high_return_pct: Decimal,
    /// Drawdown (%) below which severity is HIGH.
    #[serde(default = "default_high_drawdown_pct")]
    pub high_drawdown_pct: Decimal,
    /// Absolute daily return (%) above which severity is MODERATE.
    #[serde(default = "default_moderate_return_pct")]
    pub moderate_return_pct: Decimal,
}

fn default_critical_return_pct() -> Decimal {
    Decimal::from(8)
}

fn default_critical_drawdown_pct() -> Decimal {
    Decimal::from(-40)
}

fn default_high_return_pct() -> Decimal {
    Decimal::from(5)
}

fn default_high_drawdown_pct() -> Decimal {
    Decimal::from(-25)
}

fn default_moderate_return_pct() -> Decimal {
    Decimal::from(2)
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            critical_return_pct: default_critical_return_pct(),
            critical_drawdown_pct: default_critical_drawdown_pct(),
            high_return_pct: default_high_return_pct(),
            high_drawdown_pct: default_high_drawdown_pct(),
            moderate_return_pct: default_moderate_return_pct(),
        }
    }
}

impl ClassifierConfig {
    /// Validate threshold ordering.
    ///
    /// Returns Err if values are invalid:
    /// - return rungs not strictly increasing (moderate < high < critical)
    /// - moderate_return_pct not positive
    /// - drawdown rungs not strictly decreasing (high > critical) or not negative
    pub fn validate(&self) -> Result<(), String> {
        if self.moderate_return_pct <= Decimal::ZERO {
            return Err(format!(
                "moderate_return_pct ({}) must be positive",
                self.moderate_return_pct
            ));
        }

        if self.moderate_return_pct >= self.high_return_pct {
            return Err(format!(
                "moderate_return_pct ({}) must be less than high_return_pct ({})",
                self.moderate_return_pct, self.high_return_pct
            ));
        }

        if self.high_return_pct >= self.critical_return_pct {
            return Err(format!(
                "high_return_pct ({}) must be less than critical_return_pct ({})",
                self.high_return_pct, self.critical_return_pct
            ));
        }

        if !self.high_drawdown_pct.is_sign_negative() {
            return Err(format!(
                "high_drawdown_pct ({}) must be negative",
                self.high_drawdown_pct
            ));
        }

        if self.critical_drawdown_pct >= self.high_drawdown_pct {
            return Err(format!(
                "critical_drawdown_pct ({}) must be below high_drawdown_pct ({})",
                self.critical_drawdown_pct, self.high_drawdown_pct
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_config_is_valid() {
        let config = ClassifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.critical_return_pct, dec!(8));
        assert_eq!(config.critical_drawdown_pct, dec!(-40));
    }

    #[test]
    fn test_validate_return_rung_order() {
        let config = ClassifierConfig {
            moderate_return_pct: dec!(5),
            high_return_pct: dec!(5),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must be less than"));
    }

    #[test]
    fn test_validate_nonpositive_moderate() {
        let config = ClassifierConfig {
            moderate_return_pct: dec!(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_drawdown_rung_order() {
        let config = ClassifierConfig {
            critical_drawdown_pct: dec!(-20),
            high_drawdown_pct: dec!(-25),
            ..Default::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("must be below"));
    }

    #[test]
    fn test_validate_positive_drawdown() {
        let config = ClassifierConfig {
            high_drawdown_pct: dec!(25),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
