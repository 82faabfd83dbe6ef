//! Ledger faults deny instead of allowing.

use std::sync::Arc;

use plateguard_core::config::GateConfig;
use plateguard_core::errors::{PlateguardResult, StorageError};
use plateguard_core::models::{
    DenyReason, GateDecision, InteractionKind, InteractionRecord, LedgerFilter, UserId,
};
use plateguard_core::traits::{AdmissionCheck, ILedgerStore};
use plateguard_gate::InteractionGate;
use plateguard_storage::SqliteLedger;
use test_fixtures::{plate, t0};

struct UnreachableLedger;

impl ILedgerStore for UnreachableLedger {
    fn append(&self, _record: &InteractionRecord) -> PlateguardResult<()> {
        Err(StorageError::Unavailable { reason: "connection refused".into() }.into())
    }

    fn query(&self, _filter: &LedgerFilter) -> PlateguardResult<Vec<InteractionRecord>> {
        Err(StorageError::Unavailable { reason: "connection refused".into() }.into())
    }

    fn append_if(
        &self,
        _record: &InteractionRecord,
        _check: &AdmissionCheck<'_>,
    ) -> PlateguardResult<GateDecision> {
        Err(StorageError::Unavailable { reason: "connection refused".into() }.into())
    }

    fn len(&self) -> PlateguardResult<usize> {
        Err(StorageError::Unavailable { reason: "connection refused".into() }.into())
    }
}

const UNAVAILABLE: GateDecision = GateDecision::Denied(DenyReason::StoreUnavailable);

#[test]
fn unreachable_ledger_denies_everything() {
    let gate = InteractionGate::new(Arc::new(UnreachableLedger), &GateConfig::default());
    let abc = plate("ABC1234");
    let alice = UserId::from("alice");

    assert!(gate.is_reported(&abc, &alice));
    assert_eq!(gate.can_send_message(&abc, &alice), UNAVAILABLE);
    assert_eq!(gate.can_evaluate(&abc, &alice, t0()), UNAVAILABLE);
    assert_eq!(gate.can_send_solidary(&abc, &alice), UNAVAILABLE);

    assert_eq!(gate.try_send_message(&abc, &alice, t0()), UNAVAILABLE);
    assert_eq!(gate.try_evaluate(&abc, &alice, t0()), UNAVAILABLE);
    assert_eq!(gate.try_send_solidary(&abc, &alice, t0()), UNAVAILABLE);
    assert_eq!(gate.report(&abc, &alice, t0()), UNAVAILABLE);

    assert!(gate.record_message(&abc, &alice, t0()).is_err());
    assert!(gate.reported_plates(&alice).is_err());
}

#[test]
fn corrupt_rows_deny_instead_of_reading_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ledger.db");
    let ledger = Arc::new(SqliteLedger::open(&path, 5_000).unwrap());
    let gate = InteractionGate::new(ledger.clone(), &GateConfig::default());
    let abc = plate("ABC1234");
    let alice = UserId::from("alice");

    gate.report(&abc, &alice, t0());

    let raw = rusqlite::Connection::open(&path).unwrap();
    raw.execute("UPDATE interactions SET kind = 'r3port'", []).unwrap();
    drop(raw);

    // The report row is unreadable; it must not be mistaken for "no report".
    assert!(gate.is_reported(&abc, &alice));
    assert_eq!(gate.can_send_message(&abc, &alice), UNAVAILABLE);
    assert_eq!(gate.try_send_solidary(&abc, &alice, t0()), UNAVAILABLE);
    assert_eq!(
        ledger
            .query(&LedgerFilter::default().with_kind(InteractionKind::Solidary))
            .unwrap()
            .len(),
        0
    );
}
