//! Engine output: the roadmap, headline benefits, and payback estimate.
//!
//! Field names are the ones the persistence and rendering collaborators
//! read, so they are part of the contract.

use serde::{Deserialize, Serialize};

/// One time-boxed slice of the roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub timeframe: String,
    pub technologies: Vec<String>,
}

/// Ordered roadmap phases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roadmap(Vec<Phase>);

impl Roadmap {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self(phases)
    }

    pub fn phases(&self) -> &[Phase] {
        &self.0
    }

    /// Number of technologies scheduled across all phases.
    pub fn technology_count(&self) -> usize {
        self.0.iter().map(|phase| phase.technologies.len()).sum()
    }

    pub fn technology_names(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .flat_map(|phase| phase.technologies.iter().map(String::as_str))
    }
}

/// Benchmark improvement percentages, reported when no financial data was
/// supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementPercentages {
    pub downtime_reduction: f64,
    pub scrap_reduction: f64,
    pub energy_savings: f64,
}

/// Percentages together with whichever annual savings could be derived
/// from the financial inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonetaryBenefits {
    pub downtime_reduction_pct: f64,
    pub scrap_reduction_pct: f64,
    pub energy_savings_pct: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime_savings_annual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrap_savings_annual: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_savings_annual: Option<f64>,
    pub total_annual_savings: f64,
}

/// Headline benefit estimate. The monetary shape is only produced when
/// financial inputs were present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeadlineBenefits {
    Monetary(MonetaryBenefits),
    Percentages(ImprovementPercentages),
}

impl HeadlineBenefits {
    pub fn percentages(&self) -> ImprovementPercentages {
        match self {
            HeadlineBenefits::Percentages(p) => *p,
            HeadlineBenefits::Monetary(m) => ImprovementPercentages {
                downtime_reduction: m.downtime_reduction_pct,
                scrap_reduction: m.scrap_reduction_pct,
                energy_savings: m.energy_savings_pct,
            },
        }
    }

    pub fn monetary(&self) -> Option<&MonetaryBenefits> {
        match self {
            HeadlineBenefits::Monetary(m) => Some(m),
            HeadlineBenefits::Percentages(_) => None,
        }
    }

    pub fn total_annual_savings(&self) -> Option<f64> {
        self.monetary().map(|m| m.total_annual_savings)
    }
}

/// Terminal output of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub roadmap: Roadmap,
    pub headline_benefits: HeadlineBenefits,
    pub payback_months: u32,
    pub assumptions: String,
}
