//! Pillar ranking: which capability gaps matter most to this business.
//!
//! A pillar's score is its gap multiplied by the *average* weight of the
//! business priorities it serves. Priorities the user did not rank still
//! count in the average with weight zero, so a pillar only tied to
//! unranked priorities scores zero however large its gap.

use super::gaps::GapMap;
use super::weights::PriorityWeights;
use crate::core::Pillar;
use serde::Serialize;

/// Ranked pillar with its score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedPillar {
    pub pillar: Pillar,
    pub gap: u8,
    pub priority_weight: f64,
    pub score: f64,
}

/// Average weight of the priorities `pillar` serves, 0 when it serves none.
pub fn pillar_priority_weight(pillar: Pillar, weights: &PriorityWeights) -> f64 {
    let related = pillar.related_priorities();
    if related.is_empty() {
        return 0.0;
    }

    let total: f64 = related
        .iter()
        .map(|priority| weights.get(priority).copied().unwrap_or(0.0))
        .sum();
    total / related.len() as f64
}

/// Score every pillar with a gap entry and sort by score, highest first.
///
/// The sort is stable: equal scores keep the order of `gaps`.
pub fn rank_pillars_by_gap(gaps: &GapMap, weights: &PriorityWeights) -> Vec<RankedPillar> {
    let mut ranked: Vec<RankedPillar> = gaps
        .iter()
        .map(|(pillar, gap)| {
            let priority_weight = pillar_priority_weight(*pillar, weights);
            RankedPillar {
                pillar: *pillar,
                gap: *gap,
                priority_weight,
                score: f64::from(*gap) * priority_weight,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
