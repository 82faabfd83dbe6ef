use plateguard_classify::CategoryClassifier;
use plateguard_core::models::{ScoreAxis, Tier};
use proptest::prelude::*;

proptest! {
    #[test]
    fn classification_is_monotonic(a in any::<i64>(), b in any::<i64>()) {
        let c = CategoryClassifier::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(c.tier(lo) <= c.tier(hi));
    }

    #[test]
    fn axes_agree_on_tier(score in any::<i64>()) {
        let c = CategoryClassifier::default();
        prop_assert_eq!(
            c.classify(score, ScoreAxis::Plate).tier(),
            c.classify(score, ScoreAxis::Icc).tier()
        );
    }

    #[test]
    fn score_lies_within_its_tier_bounds(score in any::<i64>()) {
        let c = CategoryClassifier::default();
        let tier = c.tier(score);
        if let Some(lo) = c.lower_bound(tier) {
            prop_assert!(score >= lo);
        }
        if let Some(hi) = c.upper_bound(tier) {
            prop_assert!(score < hi);
        }
    }

    #[test]
    fn reaching_the_next_bound_moves_up_exactly_one_tier(score in -2_000i64..3_000) {
        let c = CategoryClassifier::default();
        let tier = c.tier(score);
        if let Some(points) = c.points_to_next_tier(score) {
            prop_assert!(points > 0);
            prop_assert_eq!(c.tier(score + points), tier.next().unwrap());
            prop_assert_eq!(c.tier(score + points - 1), tier);
        } else {
            prop_assert_eq!(tier, Tier::HIGHEST);
        }
    }
}
