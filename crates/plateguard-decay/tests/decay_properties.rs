use chrono::Duration;
use proptest::prelude::*;

use plateguard_core::models::ScoreAxis;
use plateguard_core::traits::IScoreDecayPolicy;
use plateguard_decay::{MonthlyStepDecay, NoDecay};
use test_fixtures::t0;

fn axis() -> impl Strategy<Value = ScoreAxis> {
    prop_oneof![Just(ScoreAxis::Plate), Just(ScoreAxis::Icc)]
}

proptest! {
    #[test]
    fn monthly_step_never_crosses_zero(
        axis in axis(),
        points in 0i64..1_000,
        score in -1_000_000i64..1_000_000,
        elapsed_secs in 0i64..(20 * 365 * 86_400),
    ) {
        let policy = MonthlyStepDecay::new(points);
        let after = policy.decay(axis, score, t0(), t0() + Duration::seconds(elapsed_secs));
        prop_assert!(after.abs() <= score.abs());
        prop_assert!(after == 0 || after.signum() == score.signum());
    }

    #[test]
    fn monthly_step_is_the_identity_when_no_time_has_passed(
        axis in axis(),
        points in 0i64..1_000,
        score in -1_000_000i64..1_000_000,
        before_secs in 0i64..(20 * 365 * 86_400),
    ) {
        let policy = MonthlyStepDecay::new(points);
        prop_assert_eq!(policy.decay(axis, score, t0(), t0()), score);
        let earlier = t0() - Duration::seconds(before_secs);
        prop_assert_eq!(policy.decay(axis, score, t0(), earlier), score);
    }

    #[test]
    fn decay_is_monotone_in_elapsed_time(
        points in 1i64..1_000,
        score in -1_000_000i64..1_000_000,
        a in 0i64..(10 * 365 * 86_400),
        b in 0i64..(10 * 365 * 86_400),
    ) {
        let policy = MonthlyStepDecay::new(points);
        let (short, long) = (a.min(b), a.max(b));
        let at = |secs| policy.decay(ScoreAxis::Plate, score, t0(), t0() + Duration::seconds(secs));
        prop_assert!(at(long).abs() <= at(short).abs());
    }

    #[test]
    fn no_decay_is_always_the_identity(
        axis in axis(),
        score in any::<i64>(),
        offset_secs in -(20 * 365 * 86_400i64)..(20 * 365 * 86_400),
    ) {
        let now = t0() + Duration::seconds(offset_secs);
        prop_assert_eq!(NoDecay.decay(axis, score, t0(), now), score);
    }
}
