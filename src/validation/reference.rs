//! Sanity checks over admin-maintained reference data.
//!
//! Nothing here rejects the data: the engine already degrades gracefully
//! on odd benchmarks, so callers only surface these as warnings.

use crate::core::{Benchmark, Pillar, ReferenceData, Technology};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ReferenceWarning {
    /// `low <= med <= high` does not hold.
    UnorderedRange { category: String },
    NegativeValue { category: String, value: f64 },
    /// Later entries with the same category are never looked up.
    DuplicateCategory { category: String, index: usize },
    DuplicateTechnologyId { id: String, index: usize },
    /// The pillar field names no known pillar, so the entry never matches.
    UnmatchedPillar { technology: String },
}

impl fmt::Display for ReferenceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceWarning::UnorderedRange { category } => {
                write!(f, "benchmark '{category}': expected low <= med <= high")
            }
            ReferenceWarning::NegativeValue { category, value } => {
                write!(f, "benchmark '{category}': negative value {value}")
            }
            ReferenceWarning::DuplicateCategory { category, index } => write!(
                f,
                "benchmarks[{index}]: category '{category}' already defined, entry is ignored"
            ),
            ReferenceWarning::DuplicateTechnologyId { id, index } => write!(
                f,
                "technologies[{index}]: id {id} already used, entry is never scheduled"
            ),
            ReferenceWarning::UnmatchedPillar { technology } => {
                write!(f, "technology '{technology}': pillar matches no known pillar")
            }
        }
    }
}

pub fn check_benchmarks(benchmarks: &[Benchmark]) -> Vec<ReferenceWarning> {
    let mut warnings = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (index, bench) in benchmarks.iter().enumerate() {
        if !seen.insert(bench.category.as_str()) {
            warnings.push(ReferenceWarning::DuplicateCategory {
                category: bench.category.clone(),
                index,
            });
            continue;
        }

        let values = [bench.low, bench.med, bench.high];
        if let Some(value) = values.iter().flatten().copied().find(|v| *v < 0.0) {
            warnings.push(ReferenceWarning::NegativeValue {
                category: bench.category.clone(),
                value,
            });
        }

        let present: Vec<f64> = values.iter().flatten().copied().collect();
        if present.windows(2).any(|pair| pair[0] > pair[1]) {
            warnings.push(ReferenceWarning::UnorderedRange {
                category: bench.category.clone(),
            });
        }
    }

    warnings
}

pub fn check_technologies(technologies: &[Technology]) -> Vec<ReferenceWarning> {
    let mut warnings = Vec::new();
    let mut seen = HashSet::new();

    for (index, tech) in technologies.iter().enumerate() {
        if !seen.insert(&tech.id) {
            warnings.push(ReferenceWarning::DuplicateTechnologyId {
                id: tech.id.to_string(),
                index,
            });
        }
        if !Pillar::ALL.into_iter().any(|p| tech.addresses(p)) {
            warnings.push(ReferenceWarning::UnmatchedPillar {
                technology: tech.name.clone(),
            });
        }
    }

    warnings
}

pub fn check_reference_data(reference: &ReferenceData) -> Vec<ReferenceWarning> {
    let mut warnings = check_benchmarks(&reference.benchmarks);
    warnings.extend(check_technologies(&reference.technologies));
    warnings
}
