//! Benchmarks for gate decisions over a populated ledger.

use std::sync::Arc;

use chrono::Duration;
use criterion::{criterion_group, criterion_main, Criterion};

use plateguard_core::config::GateConfig;
use plateguard_core::models::{InteractionKind, InteractionRecord, UserId};
use plateguard_core::traits::ILedgerStore;
use plateguard_gate::InteractionGate;
use plateguard_storage::InMemoryLedger;
use test_fixtures::{plate, t0};

fn populated_gate() -> InteractionGate {
    let ledger = Arc::new(InMemoryLedger::new());
    let plates = ["ABC1234", "XYZ9999", "QWE1R23", "JKL5M67"];
    for i in 0..10_000i64 {
        let record = InteractionRecord::new(
            plate(plates[(i % 4) as usize]),
            UserId::from(format!("user-{}", i % 250)),
            InteractionKind::ALL[(i % 3) as usize],
            t0() + Duration::seconds(i),
        );
        ledger.append(&record).expect("append");
    }
    InteractionGate::new(ledger, &GateConfig::default())
}

fn bench_can_evaluate(c: &mut Criterion) {
    let gate = populated_gate();
    let abc = plate("ABC1234");
    let user = UserId::from("user-8");
    let now = t0() + Duration::days(2);

    c.bench_function("can_evaluate_populated", |b| {
        b.iter(|| gate.can_evaluate(&abc, &user, now))
    });
}

fn bench_try_send_solidary(c: &mut Criterion) {
    let gate = populated_gate();
    let xyz = plate("XYZ9999");
    let user = UserId::from("user-1");

    c.bench_function("try_send_solidary_denied", |b| {
        b.iter(|| gate.try_send_solidary(&xyz, &user, t0()))
    });
}

fn bench_reported_plates(c: &mut Criterion) {
    let gate = populated_gate();
    let user = UserId::from("user-3");

    c.bench_function("reported_plates_scan", |b| {
        b.iter(|| gate.reported_plates(&user).expect("query"))
    });
}

criterion_group!(benches, bench_can_evaluate, bench_try_send_solidary, bench_reported_plates);
criterion_main!(benches);
