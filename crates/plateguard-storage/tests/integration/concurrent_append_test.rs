//! Integration test: concurrent check-and-append on one pair admits one writer.

use std::sync::{Arc, Barrier};
use std::thread;

use plateguard_core::models::{
    DenyReason, GateDecision, InteractionKind, InteractionRecord, UserId,
};
use plateguard_core::traits::ILedgerStore;
use plateguard_storage::{InMemoryLedger, SqliteLedger};
use test_fixtures::{plate, t0};

const THREADS: usize = 16;

fn no_solidary(records: &[InteractionRecord]) -> GateDecision {
    if records.iter().any(|r| r.kind == InteractionKind::Solidary) {
        GateDecision::Denied(DenyReason::AlreadySent)
    } else {
        GateDecision::Allowed
    }
}

fn race_solidary(ledger: Arc<dyn ILedgerStore>) -> usize {
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let ledger = Arc::clone(&ledger);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let record = InteractionRecord::new(
                    plate("ABC1234"),
                    UserId::from("tab-user"),
                    InteractionKind::Solidary,
                    t0(),
                );
                barrier.wait();
                ledger.append_if(&record, &no_solidary).unwrap().is_allowed()
            })
        })
        .collect();

    handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|allowed| *allowed)
        .count()
}

#[test]
fn in_memory_ledger_admits_exactly_one_solidary() {
    let ledger: Arc<dyn ILedgerStore> = Arc::new(InMemoryLedger::new());
    assert_eq!(race_solidary(Arc::clone(&ledger)), 1);
    assert_eq!(ledger.len().unwrap(), 1);
}

#[test]
fn sqlite_ledger_admits_exactly_one_solidary() {
    let dir = tempfile::tempdir().unwrap();
    let ledger: Arc<dyn ILedgerStore> =
        Arc::new(SqliteLedger::open(&dir.path().join("race.db"), 5_000).unwrap());
    assert_eq!(race_solidary(Arc::clone(&ledger)), 1);
    assert_eq!(ledger.len().unwrap(), 1);
}

#[test]
fn unconditional_appends_from_many_threads_are_all_kept() {
    let ledger = Arc::new(InMemoryLedger::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let ledger = Arc::clone(&ledger);
            thread::spawn(move || {
                for i in 0..50 {
                    let record = InteractionRecord::new(
                        plate("ABC1234"),
                        UserId::from(format!("user-{}", (t + i) % 3)),
                        InteractionKind::Message,
                        t0(),
                    );
                    ledger.append(&record).unwrap();
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(ledger.len().unwrap(), 400);
}
