use crate::core::{BusinessPriority, PriorityRanking};
use indexmap::IndexMap;

/// Weight per ranked priority, in ranking order.
pub type PriorityWeights = IndexMap<BusinessPriority, f64>;

/// Position `i` of `n` ranked priorities weighs `1 - i / 2n`.
///
/// The top priority weighs 1.0 and weights fall linearly toward 0.5. An
/// empty ranking yields no weights.
pub fn generate_priority_weights(ranking: &PriorityRanking) -> PriorityWeights {
    let n = ranking.len();
    if n == 0 {
        return PriorityWeights::new();
    }

    let span = (2 * n) as f64;
    ranking
        .as_slice()
        .iter()
        .enumerate()
        .map(|(index, priority)| (*priority, 1.0 - index as f64 / span))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use BusinessPriority::*;

    #[test]
    fn test_empty_ranking_has_no_weights() {
        let weights = generate_priority_weights(&PriorityRanking::default());
        assert!(weights.is_empty());
    }

    #[test]
    fn test_single_priority_weighs_one() {
        let ranking = PriorityRanking::new(vec![Safety]).unwrap();
        let weights = generate_priority_weights(&ranking);
        assert_eq!(weights[&Safety], 1.0);
    }

    #[test]
    fn test_weights_for_full_ranking() {
        let ranking =
            PriorityRanking::new(vec![Cost, Quality, Safety, Delivery, Sustainability, Flexibility])
                .unwrap();
        let weights = generate_priority_weights(&ranking);
        assert_eq!(weights[&Cost], 1.0);
        assert_eq!(weights[&Safety], 1.0 - 2.0 / 12.0);
        assert_eq!(weights[&Flexibility], 1.0 - 5.0 / 12.0);
    }

    #[test]
    fn test_two_priorities() {
        let ranking = PriorityRanking::new(vec![Cost, Quality]).unwrap();
        let weights = generate_priority_weights(&ranking);
        assert_eq!(weights[&Cost], 1.0);
        assert_eq!(weights[&Quality], 0.75);
    }
}
