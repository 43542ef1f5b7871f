//! Scoring rule configuration.

use serde::{Deserialize, Serialize};

/// Duration thresholds used to classify delay risk.
///
/// A duration strictly greater than `high_delay_after_months` is High, strictly
/// greater than `medium_delay_after_months` is Medium, anything else is Low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskRules {
    pub medium_delay_after_months: u32,
    pub high_delay_after_months: u32,
}

impl Default for RiskRules {
    fn default() -> Self {
        Self {
            medium_delay_after_months: 12,
            high_delay_after_months: 18,
        }
    }
}

impl RiskRules {
    /// Create rules with the standard thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_medium_delay_after(mut self, months: u32) -> Self {
        self.medium_delay_after_months = months;
        self
    }

    pub fn with_high_delay_after(mut self, months: u32) -> Self {
        self.high_delay_after_months = months;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let rules = RiskRules::default();
        assert_eq!(rules.medium_delay_after_months, 12);
        assert_eq!(rules.high_delay_after_months, 18);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let rules: RiskRules = serde_json::from_str(r#"{"high_delay_after_months": 24}"#).unwrap();
        assert_eq!(rules, RiskRules::new().with_high_delay_after(24));
    }
}
