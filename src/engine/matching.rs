use crate::core::{Pillar, Technology, TechnologyId};
use std::collections::HashSet;

/// Collect catalog technologies for each pillar in rank order.
///
/// Within a pillar, technologies keep catalog order. A technology serving
/// several pillars appears once, at the position of its highest-ranked
/// pillar.
pub fn match_technologies<'a>(
    ranked_pillars: &[Pillar],
    catalog: &'a [Technology],
) -> Vec<&'a Technology> {
    let mut seen: HashSet<&'a TechnologyId> = HashSet::new();

    ranked_pillars
        .iter()
        .flat_map(|pillar| catalog.iter().filter(move |tech| tech.addresses(*pillar)))
        .filter(|&tech| seen.insert(&tech.id))
        .collect()
}
