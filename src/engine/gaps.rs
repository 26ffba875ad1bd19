use crate::core::{MaturityScore, Pillar, MAX_MATURITY};
use indexmap::IndexMap;

/// Shortfall per pillar, in the order the pillars were rated.
pub type GapMap = IndexMap<Pillar, u8>;

/// Gap = ideal (5) - current rating, so a rating of 5 has no gap.
pub fn calculate_maturity_gaps(maturity: &MaturityScore) -> GapMap {
    maturity
        .iter()
        .map(|(pillar, rating)| (pillar, MAX_MATURITY.saturating_sub(rating)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_is_distance_to_five() {
        let maturity = MaturityScore::from_pairs([
            (Pillar::Process, 1),
            (Pillar::Quality, 5),
            (Pillar::People, 3),
        ])
        .unwrap();
        let gaps = calculate_maturity_gaps(&maturity);
        assert_eq!(gaps[&Pillar::Process], 4);
        assert_eq!(gaps[&Pillar::Quality], 0);
        assert_eq!(gaps[&Pillar::People], 2);
        assert_eq!(
            gaps.keys().copied().collect::<Vec<_>>(),
            vec![Pillar::Process, Pillar::Quality, Pillar::People]
        );
    }

    #[test]
    fn test_unrated_pillars_have_no_gap_entry() {
        let maturity = MaturityScore::from_pairs([(Pillar::Asset, 2)]).unwrap();
        let gaps = calculate_maturity_gaps(&maturity);
        assert_eq!(gaps.len(), 1);
        assert!(!gaps.contains_key(&Pillar::Delivery));
    }
}
