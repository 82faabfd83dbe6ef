//! Property tests for the pure admission rules.

use chrono::Duration;
use proptest::prelude::*;

use plateguard_core::models::{
    DenyReason, GateDecision, InteractionKind, InteractionRecord, UserId,
};
use plateguard_gate::policy;
use test_fixtures::{plate, t0};

fn record(kind: InteractionKind, offset_secs: i64) -> InteractionRecord {
    InteractionRecord::new(
        plate("ABC1234"),
        UserId::from("alice"),
        kind,
        t0() + Duration::seconds(offset_secs),
    )
}

fn arb_history() -> impl Strategy<Value = Vec<InteractionRecord>> {
    proptest::collection::vec((0..4usize, 0i64..10_000_000), 0..20).prop_map(|items| {
        items
            .into_iter()
            .map(|(k, offset)| record(InteractionKind::ALL[k], offset))
            .collect()
    })
}

proptest! {
    #[test]
    fn a_report_denies_every_action(mut history in arb_history(), now_offset in 0i64..100_000_000) {
        history.push(record(InteractionKind::Report, 0));
        let now = t0() + Duration::seconds(now_offset);
        let blocked = GateDecision::Denied(DenyReason::PermanentlyBlocked);
        prop_assert_eq!(policy::message_decision(&history), blocked);
        prop_assert_eq!(policy::solidary_decision(&history), blocked);
        prop_assert_eq!(policy::evaluation_decision(&history, now, Duration::hours(24)), blocked);
    }

    #[test]
    fn cooldown_denial_always_points_past_now(history in arb_history(), now_offset in 0i64..20_000_000) {
        let now = t0() + Duration::seconds(now_offset);
        if let GateDecision::Denied(DenyReason::CooldownActive { retry_at }) =
            policy::evaluation_decision(&history, now, Duration::hours(24))
        {
            prop_assert!(retry_at > now);
            // Waiting until retry_at clears the cooldown unless another
            // evaluation sits beyond it.
            let later = policy::evaluation_decision(&history, retry_at, Duration::hours(24));
            let newer_exists = history.iter().any(|r| {
                r.kind == InteractionKind::Evaluation && r.timestamp > retry_at - Duration::hours(24)
            });
            prop_assert_eq!(later.is_allowed(), !newer_exists);
        }
    }

    #[test]
    fn solidary_allowed_iff_none_sent(history in arb_history()) {
        let reported = policy::is_reported(&history);
        let sent = history.iter().any(|r| r.kind == InteractionKind::Solidary);
        prop_assert_eq!(policy::solidary_decision(&history).is_allowed(), !reported && !sent);
    }
}
