//! The roadmap and ROI engine.
//!
//! A single forward pipeline of pure functions:
//!
//! 1. [`gaps`]: maturity ratings to capability gaps
//! 2. [`weights`]: priority ranking to per-priority weights
//! 3. [`ranking`]: gaps and weights to ranked pillars
//! 4. [`matching`]: ranked pillars to deduplicated catalog technologies
//! 5. [`roadmap`]: technologies into three fixed phases
//! 6. [`benefits`]: benchmark percentages, converted to currency when possible
//! 7. [`payback`]: payback period in months
//!
//! Nothing here performs I/O or keeps state between calls, so the engine
//! can be called from any number of threads at once.
//!
//! # Example
//!
//! ```rust
//! use techmap::config::RoiConfig;
//! use techmap::core::{Assessment, BusinessPriority, MaturityScore, Pillar, PriorityRanking, ReferenceData};
//! use techmap::engine::calculate_roi;
//!
//! let assessment = Assessment {
//!     maturity: MaturityScore::from_pairs([(Pillar::Process, 2), (Pillar::Quality, 4)])?,
//!     priorities: PriorityRanking::new(vec![BusinessPriority::Cost, BusinessPriority::Quality])?,
//!     financials: None,
//! };
//! let result = calculate_roi(&assessment, &ReferenceData::default(), &RoiConfig::default());
//! assert_eq!(result.payback_months, 18);
//! # Ok::<(), techmap::errors::Error>(())
//! ```

pub mod benefits;
pub mod gaps;
pub mod matching;
pub mod payback;
pub mod ranking;
pub mod roadmap;
pub mod weights;

pub use benefits::calculate_benefits;
pub use gaps::{calculate_maturity_gaps, GapMap};
pub use matching::match_technologies;
pub use payback::calculate_payback_period;
pub use ranking::{rank_pillars_by_gap, RankedPillar};
pub use roadmap::{build_roadmap, PHASE_CAPACITY, TIMEFRAMES};
pub use weights::{generate_priority_weights, PriorityWeights};

use crate::config::RoiConfig;
use crate::core::{Assessment, Pillar, ReferenceData, RoiResult};
use crate::errors::Result;
use crate::io::input::AssessmentRecord;
use crate::validation::parse_assessment;
use tracing::{debug, info_span};

/// Run the full pipeline on a validated assessment.
pub fn calculate_roi(
    assessment: &Assessment,
    reference: &ReferenceData,
    config: &RoiConfig,
) -> RoiResult {
    let _span = info_span!(
        "calculate_roi",
        pillars = assessment.maturity.len(),
        priorities = assessment.priorities.len(),
        technologies = reference.technologies.len(),
    )
    .entered();

    let gaps = calculate_maturity_gaps(&assessment.maturity);
    let weights = generate_priority_weights(&assessment.priorities);

    let ranked = rank_pillars_by_gap(&gaps, &weights);
    debug!(
        ranking = ?ranked.iter().map(|r| r.pillar.as_str()).collect::<Vec<_>>(),
        "ranked pillars"
    );

    let ranked_pillars: Vec<Pillar> = ranked.iter().map(|r| r.pillar).collect();
    let candidates = match_technologies(&ranked_pillars, &reference.technologies);
    debug!(candidates = candidates.len(), "matched technologies");

    let roadmap = build_roadmap(&candidates);

    let financials = assessment.financials.as_ref();
    let headline_benefits =
        calculate_benefits(&reference.benchmarks, financials, &config.benchmark_defaults);
    let payback_months = calculate_payback_period(
        &headline_benefits,
        roadmap.technology_count(),
        financials,
        &config.assumptions,
    );
    debug!(
        scheduled = roadmap.technology_count(),
        payback_months, "estimated payback"
    );

    RoiResult {
        roadmap,
        headline_benefits,
        payback_months,
        assumptions: config.assumptions.statement.clone(),
    }
}

/// Validate a raw assessment record and run the pipeline on it.
///
/// Structural problems are all reported together and nothing is
/// computed for an invalid record.
pub fn plan(
    record: &AssessmentRecord,
    reference: &ReferenceData,
    config: &RoiConfig,
) -> Result<RoiResult> {
    let assessment = parse_assessment(record)?;
    Ok(calculate_roi(&assessment, reference, config))
}

/// Ranked pillars with their score breakdown, for reporting.
pub fn explain_ranking(assessment: &Assessment) -> Vec<RankedPillar> {
    let gaps = calculate_maturity_gaps(&assessment.maturity);
    let weights = generate_priority_weights(&assessment.priorities);
    rank_pillars_by_gap(&gaps, &weights)
}
