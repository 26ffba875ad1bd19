//! Assessment-side domain types: pillars, business priorities, maturity
//! scores, priority rankings, and optional financial inputs.
//!
//! These types are only constructed through checked constructors, so a
//! value that reaches the engine already satisfies the structural
//! invariants (ratings in `1..=5`, no duplicate or unknown priorities,
//! non-negative finite financial figures).

use crate::errors::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest attainable maturity rating. Gaps are measured against it.
pub const MAX_MATURITY: u8 = 5;

/// Lowest accepted maturity rating.
pub const MIN_MATURITY: u8 = 1;

/// Capability dimension of manufacturing maturity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pillar {
    Process,
    Asset,
    People,
    Technology,
    Organization,
    Quality,
    Delivery,
    Sustainability,
}

impl Pillar {
    /// Every pillar, in the order the intake questionnaire asks about them.
    pub const ALL: [Pillar; 8] = [
        Pillar::Process,
        Pillar::Asset,
        Pillar::People,
        Pillar::Technology,
        Pillar::Organization,
        Pillar::Quality,
        Pillar::Delivery,
        Pillar::Sustainability,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Process => "Process",
            Pillar::Asset => "Asset",
            Pillar::People => "People",
            Pillar::Technology => "Technology",
            Pillar::Organization => "Organization",
            Pillar::Quality => "Quality",
            Pillar::Delivery => "Delivery",
            Pillar::Sustainability => "Sustainability",
        }
    }

    /// Questionnaire title shown next to the rating.
    pub fn title(&self) -> &'static str {
        match self {
            Pillar::Process => "Process Excellence & Standardization",
            Pillar::Asset => "Asset Management & Reliability",
            Pillar::People => "Workforce Skills & Readiness",
            Pillar::Technology => "Technology Infrastructure",
            Pillar::Organization => "Organizational Culture & Leadership",
            Pillar::Quality => "Quality Management",
            Pillar::Delivery => "On-Time Delivery",
            Pillar::Sustainability => "Sustainability Practices",
        }
    }

    /// Business priorities this pillar contributes to.
    ///
    /// Static domain knowledge; the PillarRanker averages the weights of
    /// exactly these priorities.
    pub const fn related_priorities(&self) -> &'static [BusinessPriority] {
        use BusinessPriority::*;
        match self {
            Pillar::Process => &[Cost, Delivery],
            Pillar::Asset => &[Cost, Delivery],
            Pillar::People => &[Safety, Quality],
            Pillar::Technology => &[Cost, Quality, Flexibility],
            Pillar::Organization => &[Cost, Delivery, Flexibility],
            Pillar::Quality => &[Quality],
            Pillar::Delivery => &[Delivery],
            Pillar::Sustainability => &[Sustainability],
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Pillar::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown pillar '{s}'"))
    }
}

/// Business objective used to weight which pillars matter most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BusinessPriority {
    Cost,
    Quality,
    Safety,
    Delivery,
    Sustainability,
    Flexibility,
}

impl BusinessPriority {
    pub const ALL: [BusinessPriority; 6] = [
        BusinessPriority::Cost,
        BusinessPriority::Quality,
        BusinessPriority::Safety,
        BusinessPriority::Delivery,
        BusinessPriority::Sustainability,
        BusinessPriority::Flexibility,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessPriority::Cost => "Cost",
            BusinessPriority::Quality => "Quality",
            BusinessPriority::Safety => "Safety",
            BusinessPriority::Delivery => "Delivery",
            BusinessPriority::Sustainability => "Sustainability",
            BusinessPriority::Flexibility => "Flexibility",
        }
    }
}

impl fmt::Display for BusinessPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        BusinessPriority::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown priority '{s}'"))
    }
}

/// Self-reported maturity rating per pillar.
///
/// Keeps insertion order: the pillar ranking breaks score ties by the
/// order in which pillars were rated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaturityScore {
    ratings: IndexMap<Pillar, u8>,
}

impl MaturityScore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(pillar, rating)` pairs, rejecting the first rating
    /// outside `1..=5`.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (Pillar, u8)>) -> Result<Self> {
        let mut score = Self::new();
        for (pillar, rating) in pairs {
            score.insert(pillar, rating)?;
        }
        Ok(score)
    }

    /// Record a rating. Re-rating a pillar keeps its original position.
    pub fn insert(&mut self, pillar: Pillar, rating: u8) -> Result<()> {
        if !Self::is_valid_rating(rating) {
            return Err(Error::validation(format!(
                "maturity.{pillar}: rating {rating} is outside {MIN_MATURITY}..={MAX_MATURITY}"
            )));
        }
        self.ratings.insert(pillar, rating);
        Ok(())
    }

    pub fn is_valid_rating(rating: u8) -> bool {
        (MIN_MATURITY..=MAX_MATURITY).contains(&rating)
    }

    pub fn get(&self, pillar: Pillar) -> Option<u8> {
        self.ratings.get(&pillar).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pillar, u8)> + '_ {
        self.ratings.iter().map(|(p, r)| (*p, *r))
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Pillars of the questionnaire that have not been rated.
    pub fn missing_pillars(&self) -> Vec<Pillar> {
        Pillar::ALL
            .into_iter()
            .filter(|p| !self.ratings.contains_key(p))
            .collect()
    }
}

/// Ordered business priorities, most important first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriorityRanking {
    ranking: Vec<BusinessPriority>,
}

impl PriorityRanking {
    /// Build a ranking, rejecting duplicates.
    pub fn new(ranking: Vec<BusinessPriority>) -> Result<Self> {
        for (index, priority) in ranking.iter().enumerate() {
            if ranking[..index].contains(priority) {
                return Err(Error::validation(format!(
                    "priorities.ranking[{index}]: '{priority}' is ranked more than once"
                )));
            }
        }
        Ok(Self { ranking })
    }

    pub fn as_slice(&self) -> &[BusinessPriority] {
        &self.ranking
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

/// Unit the downtime figures are expressed in. Display only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    #[default]
    #[serde(rename = "hrs")]
    Hours,
    #[serde(rename = "shifts")]
    Shifts,
    #[serde(rename = "days")]
    Days,
}

impl TimeUnit {
    /// Short label used next to volume figures.
    pub fn label(&self) -> &'static str {
        match self {
            TimeUnit::Hours => "hrs",
            TimeUnit::Shifts => "shifts",
            TimeUnit::Days => "days",
        }
    }

    /// Singular noun used in "cost per ..." captions.
    pub fn singular(&self) -> &'static str {
        match self {
            TimeUnit::Hours => "Hour",
            TimeUnit::Shifts => "Shift",
            TimeUnit::Days => "Day",
        }
    }
}

impl FromStr for TimeUnit {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "hrs" | "hours" => Ok(TimeUnit::Hours),
            "shifts" => Ok(TimeUnit::Shifts),
            "days" => Ok(TimeUnit::Days),
            other => Err(format!("unknown time unit '{other}'")),
        }
    }
}

/// Optional financial figures used to turn percentages into currency.
///
/// A field that is absent or zero does not enable the figure that depends
/// on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub production_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downtime_cost_per_hour: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scrap_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_spend: Option<f64>,
    #[serde(default)]
    pub time_unit: TimeUnit,
}

impl FinancialInputs {
    /// Named numeric fields, in form order.
    pub fn fields(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("production_hours", self.production_hours),
            ("downtime_hours", self.downtime_hours),
            ("downtime_cost_per_hour", self.downtime_cost_per_hour),
            ("scrap_cost", self.scrap_cost),
            ("energy_spend", self.energy_spend),
        ]
    }

    /// Check that every present field is a finite, non-negative number.
    pub fn check(&self) -> Result<()> {
        let problems: Vec<String> = self
            .fields()
            .into_iter()
            .filter_map(|(name, value)| value.and_then(|v| describe_bad_amount(name, v)))
            .collect();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(Error::validations(problems))
        }
    }
}

/// Returns a message when `value` cannot be a money or volume amount.
fn describe_bad_amount(name: &str, value: f64) -> Option<String> {
    if !value.is_finite() {
        Some(format!("fin_inputs.{name}: value must be a finite number"))
    } else if value < 0.0 {
        Some(format!("fin_inputs.{name}: value {value} must not be negative"))
    } else {
        None
    }
}

/// Positive amount, or `None` when the field is missing or zero.
pub(crate) fn positive(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

/// A validated assessment, ready for the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Assessment {
    pub maturity: MaturityScore,
    pub priorities: PriorityRanking,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub financials: Option<FinancialInputs>,
}
