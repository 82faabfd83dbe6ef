use chrono::Duration;
use proptest::prelude::*;

use plateguard_alerts::StolenAlertLifecycle;
use plateguard_core::config::AlertConfig;
use plateguard_core::models::StolenAlertInfo;
use test_fixtures::t0;

proptest! {
    #[test]
    fn days_remaining_is_a_non_negative_ceiling(offset_ms in -10_000_000_000i64..10_000_000_000) {
        let lc = StolenAlertLifecycle::new(&AlertConfig::default());
        let info = StolenAlertInfo {
            activated_at: t0(),
            expires_at: t0() + Duration::milliseconds(offset_ms),
            renewal_used: false,
            is_active: true,
        };
        let days = lc.days_remaining(&info, t0());
        prop_assert!(days >= 0);
        prop_assert_eq!(days > 0, lc.is_active(&info, t0()));
        if days > 0 {
            prop_assert!(Duration::days(days) >= info.expires_at - t0());
            prop_assert!(Duration::days(days - 1) < info.expires_at - t0());
        }
    }

    #[test]
    fn at_most_one_free_renewal(gaps in proptest::collection::vec(0i64..40, 1..10)) {
        let lc = StolenAlertLifecycle::new(&AlertConfig::default());
        let mut info = StolenAlertInfo {
            activated_at: t0(),
            expires_at: t0() + Duration::days(30),
            renewal_used: false,
            is_active: true,
        };
        let mut now = t0();
        let mut renewals = 0;
        for gap in gaps {
            now += Duration::days(gap);
            if let Ok(renewed) = lc.renew_free(&info, now) {
                info = renewed;
                renewals += 1;
            }
        }
        prop_assert!(renewals <= 1);
        prop_assert_eq!(info.renewal_used, renewals == 1);
    }
}
