//! Read-only reference data: improvement benchmarks and the technology
//! catalog. Both are maintained elsewhere and only looked up here.

use super::assessment::Pillar;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Benchmark category for unplanned downtime reduction.
pub const DOWNTIME_CATEGORY: &str = "Downtime";
/// Benchmark category for scrap reduction.
pub const SCRAP_CATEGORY: &str = "Scrap";
/// Benchmark category for energy savings.
pub const ENERGY_CATEGORY: &str = "Energy";

/// Percentage-improvement range for a named category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    pub category: String,
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub med: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
}

impl Benchmark {
    pub fn new(category: impl Into<String>, low: f64, med: f64, high: f64) -> Self {
        Self {
            category: category.into(),
            low: Some(low),
            med: Some(med),
            high: Some(high),
        }
    }

    /// Usable median, treating zero and non-finite values as missing.
    pub fn usable_med(&self) -> Option<f64> {
        self.med.filter(|m| m.is_finite() && *m != 0.0)
    }
}

/// First benchmark with the given category.
pub fn find_benchmark<'a>(benchmarks: &'a [Benchmark], category: &str) -> Option<&'a Benchmark> {
    benchmarks.iter().find(|b| b.category == category)
}

/// Catalog identifier. Numeric and textual ids never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TechnologyId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for TechnologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TechnologyId::Numeric(n) => write!(f, "{n}"),
            TechnologyId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for TechnologyId {
    fn from(value: i64) -> Self {
        TechnologyId::Numeric(value)
    }
}

impl From<&str> for TechnologyId {
    fn from(value: &str) -> Self {
        TechnologyId::Text(value.to_string())
    }
}

/// Pillar(s) a technology addresses.
///
/// A single value matches any pillar whose name it contains, so a
/// free-form entry such as `"Process/Asset"` covers both. A list matches
/// its members exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PillarField {
    One(String),
    Many(Vec<String>),
}

impl PillarField {
    pub fn covers(&self, pillar: Pillar) -> bool {
        let name = pillar.as_str();
        match self {
            PillarField::One(value) => value.contains(name),
            PillarField::Many(values) => values.iter().any(|v| v == name),
        }
    }
}

impl From<Pillar> for PillarField {
    fn from(pillar: Pillar) -> Self {
        PillarField::One(pillar.as_str().to_string())
    }
}

/// Catalog entry for an adoptable technology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technology {
    pub id: TechnologyId,
    pub name: String,
    pub pillar: PillarField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vendor_examples: Vec<String>,
}

impl Technology {
    pub fn new(
        id: impl Into<TechnologyId>,
        name: impl Into<String>,
        pillar: impl Into<PillarField>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            pillar: pillar.into(),
            description: None,
            vendor_examples: Vec::new(),
        }
    }

    pub fn addresses(&self, pillar: Pillar) -> bool {
        self.pillar.covers(pillar)
    }
}

/// Both reference tables, as supplied by the reference-data provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub benchmarks: Vec<Benchmark>,
    #[serde(default)]
    pub technologies: Vec<Technology>,
}

impl ReferenceData {
    pub fn technology_named(&self, name: &str) -> Option<&Technology> {
        self.technologies.iter().find(|t| t.name == name)
    }
}
