//! ROI assumptions and benchmark fallbacks.
//!
//! These are the placeholder figures the estimates rest on. They are
//! configurable because none of them is derived from the assessment.

use crate::core::reference::{DOWNTIME_CATEGORY, ENERGY_CATEGORY, SCRAP_CATEGORY};
use serde::{Deserialize, Serialize};

/// Cost and payback assumptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssumptionsConfig {
    /// Implementation cost charged per roadmap technology
    #[serde(default = "default_cost_per_technology")]
    pub cost_per_technology: f64,

    /// Payback reported when no savings can be computed
    #[serde(default = "default_payback_months")]
    pub default_payback_months: u32,

    /// Statement attached to every result
    #[serde(default = "default_statement")]
    pub statement: String,
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        Self {
            cost_per_technology: default_cost_per_technology(),
            default_payback_months: default_payback_months(),
            statement: default_statement(),
        }
    }
}

impl AssumptionsConfig {
    pub fn validate(&self) -> Result<(), String> {
        match self.collect_problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }

    // Pure function: every out-of-range value, in declaration order
    pub fn collect_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if !self.cost_per_technology.is_finite() || self.cost_per_technology <= 0.0 {
            problems.push(format!(
                "cost_per_technology must be a positive number, got {}",
                self.cost_per_technology
            ));
        }
        if self.default_payback_months == 0 {
            problems.push("default_payback_months cannot be zero".to_string());
        }
        problems
    }
}

pub fn default_cost_per_technology() -> f64 {
    100_000.0
}
pub fn default_payback_months() -> u32 {
    18
}
pub fn default_statement() -> String {
    "Based on industry averages for similar manufacturing operations.".to_string()
}

/// Median improvement percentages used when a benchmark category is
/// missing from the reference table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDefaults {
    #[serde(default = "default_downtime_pct")]
    pub downtime: f64,

    #[serde(default = "default_scrap_pct")]
    pub scrap: f64,

    #[serde(default = "default_energy_pct")]
    pub energy: f64,
}

impl Default for BenchmarkDefaults {
    fn default() -> Self {
        Self {
            downtime: default_downtime_pct(),
            scrap: default_scrap_pct(),
            energy: default_energy_pct(),
        }
    }
}

impl BenchmarkDefaults {
    // Pure function: Check if a percentage is usable as a fallback
    pub fn is_valid_percentage(value: f64) -> bool {
        value.is_finite() && (0.0..=100.0).contains(&value)
    }

    pub fn by_category(&self) -> [(&'static str, f64); 3] {
        [
            (DOWNTIME_CATEGORY, self.downtime),
            (SCRAP_CATEGORY, self.scrap),
            (ENERGY_CATEGORY, self.energy),
        ]
    }

    pub fn collect_problems(&self) -> Vec<String> {
        self.by_category()
            .into_iter()
            .filter(|(_, value)| !Self::is_valid_percentage(*value))
            .map(|(category, value)| {
                format!("{category} default must be between 0 and 100, got {value}")
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), String> {
        match self.collect_problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }
}

pub fn default_downtime_pct() -> f64 {
    15.0
}
pub fn default_scrap_pct() -> f64 {
    8.0
}
pub fn default_energy_pct() -> f64 {
    6.0
}

/// Everything the engine reads from configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoiConfig {
    pub assumptions: AssumptionsConfig,
    pub benchmark_defaults: BenchmarkDefaults,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        let config = RoiConfig::default();
        assert_eq!(config.assumptions.cost_per_technology, 100_000.0);
        assert_eq!(config.assumptions.default_payback_months, 18);
        assert_eq!(config.benchmark_defaults.downtime, 15.0);
        assert_eq!(config.benchmark_defaults.scrap, 8.0);
        assert_eq!(config.benchmark_defaults.energy, 6.0);
    }

    #[test]
    fn test_assumptions_reject_non_positive_cost() {
        let config = AssumptionsConfig {
            cost_per_technology: 0.0,
            default_payback_months: 0,
            ..Default::default()
        };
        assert_eq!(config.collect_problems().len(), 2);
        assert!(config.validate().unwrap_err().contains("cost_per_technology"));
    }

    #[test]
    fn test_benchmark_defaults_range() {
        let defaults = BenchmarkDefaults {
            scrap: 120.0,
            ..Default::default()
        };
        assert!(defaults.validate().unwrap_err().contains("Scrap"));
        assert!(BenchmarkDefaults::default().validate().is_ok());
    }
}
