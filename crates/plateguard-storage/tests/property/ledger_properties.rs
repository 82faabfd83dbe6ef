//! Property tests: the in-memory and SQLite ledgers agree and never lose writes.

use chrono::Duration;
use proptest::prelude::*;

use plateguard_core::models::{InteractionKind, InteractionRecord, LedgerFilter, UserId};
use plateguard_core::traits::ILedgerStore;
use plateguard_storage::{InMemoryLedger, SqliteLedger};
use test_fixtures::{plate, t0};

const PLATES: [&str; 3] = ["ABC1234", "XYZ9999", "QWE4R56"];
const USERS: [&str; 3] = ["ana", "bia", "caio"];

fn arb_record() -> impl Strategy<Value = InteractionRecord> {
    (0..PLATES.len(), 0..USERS.len(), 0..4usize, 0i64..1_000_000).prop_map(
        |(p, u, k, offset)| {
            InteractionRecord::new(
                plate(PLATES[p]),
                UserId::from(USERS[u]),
                InteractionKind::ALL[k],
                t0() + Duration::seconds(offset),
            )
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_append_is_queryable(records in proptest::collection::vec(arb_record(), 0..40)) {
        let memory = InMemoryLedger::new();
        let sqlite = SqliteLedger::open_in_memory().unwrap();
        for r in &records {
            memory.append(r).unwrap();
            sqlite.append(r).unwrap();
        }
        prop_assert_eq!(memory.len().unwrap(), records.len());
        prop_assert_eq!(sqlite.len().unwrap(), records.len());

        for p in PLATES {
            for u in USERS {
                let filter = LedgerFilter::pair(&plate(p), &UserId::from(u));
                let a = memory.query(&filter).unwrap();
                let b = sqlite.query(&filter).unwrap();
                let expected = records.iter().filter(|r| filter.matches(r)).count();
                prop_assert_eq!(a.len(), expected);
                prop_assert_eq!(b.len(), expected);
                prop_assert!(a.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
                prop_assert!(b.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            }
        }
    }
}
