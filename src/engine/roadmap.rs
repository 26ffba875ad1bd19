use crate::core::{Phase, Roadmap, Technology};

/// Phase labels, earliest first. The roadmap always has exactly these.
pub const TIMEFRAMES: [&str; 3] = ["0-12 months", "12-24 months", "24-36 months"];

/// Technologies scheduled per phase.
pub const PHASE_CAPACITY: usize = 2;

/// Most technologies a roadmap can hold; later candidates are dropped.
pub const MAX_ROADMAP_TECHNOLOGIES: usize = TIMEFRAMES.len() * PHASE_CAPACITY;

/// Slot candidates positionally into the fixed phases.
pub fn build_roadmap(candidates: &[&Technology]) -> Roadmap {
    let phases = TIMEFRAMES
        .iter()
        .enumerate()
        .map(|(index, timeframe)| Phase {
            timeframe: (*timeframe).to_string(),
            technologies: candidates
                .iter()
                .skip(index * PHASE_CAPACITY)
                .take(PHASE_CAPACITY)
                .map(|tech| tech.name.clone())
                .collect(),
        })
        .collect();

    Roadmap::new(phases)
}
