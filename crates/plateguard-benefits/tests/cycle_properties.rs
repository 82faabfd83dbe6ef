//! Property tests: counters stay within caps under arbitrary access patterns.

use chrono::Duration;
use proptest::prelude::*;

use plateguard_benefits::BenefitCycleTracker;
use plateguard_core::config::BenefitConfig;
use plateguard_core::models::{BenefitKind, SealTier};
use test_fixtures::{t0, user_with_seal};

#[derive(Debug, Clone)]
enum Op {
    Renew(i64),
    Consume,
    Redeem(i64),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0i64..3).prop_map(Op::Renew),
        Just(Op::Consume),
        (0i64..3).prop_map(Op::Redeem),
    ]
}

fn arb_seal() -> impl Strategy<Value = (SealTier, bool)> {
    (0..4usize, any::<bool>()).prop_map(|(s, client)| {
        let seal = [SealTier::None, SealTier::Blue, SealTier::Yellow, SealTier::Green][s];
        (seal, client)
    })
}

proptest! {
    #[test]
    fn used_never_exceeds_cap(
        (seal, client) in arb_seal(),
        ops in proptest::collection::vec((arb_op(), 0..2usize), 0..60),
    ) {
        let tracker = BenefitCycleTracker::new(&BenefitConfig::default());
        let mut user = user_with_seal("p", seal, client, t0());
        let mut now = t0();

        for (op, k) in ops {
            let kind = [BenefitKind::TheftAlert, BenefitKind::SupportCall][k];
            match op {
                Op::Renew(step) => {
                    now += Duration::days(step * 20);
                    tracker.maybe_renew_cycle(&mut user, kind, now);
                }
                Op::Consume => {
                    let before = tracker.remaining_credits(&user, kind);
                    let result = tracker.consume_credit(&mut user, kind);
                    prop_assert_eq!(result.is_ok(), before > 0);
                }
                Op::Redeem(step) => {
                    now += Duration::days(step * 20);
                    let _ = tracker.redeem(&mut user, kind, now);
                }
            }

            for row in tracker.entitlements(&user) {
                prop_assert!(row.used <= row.cap);
                prop_assert_eq!(row.remaining, row.cap - row.used);
            }
        }
    }
}
