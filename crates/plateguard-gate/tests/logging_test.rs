use std::io;
use std::sync::{Arc, Mutex};

use plateguard_core::config::GateConfig;
use plateguard_core::models::UserId;
use plateguard_gate::InteractionGate;
use plateguard_storage::InMemoryLedger;
use test_fixtures::{plate, t0};
use tracing::Level;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with a subscriber that keeps warnings and above.
fn warnings_during(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

fn gate() -> InteractionGate {
    InteractionGate::new(Arc::new(InMemoryLedger::new()), &GateConfig::default())
}

#[test]
fn abuse_limit_denials_are_warnings() {
    let gate = gate();
    let (abc, alice) = (plate("ABC1234"), UserId::from("alice"));

    let first = warnings_during(|| {
        assert!(gate.try_send_solidary(&abc, &alice, t0()).is_allowed());
        assert!(gate.try_evaluate(&abc, &alice, t0()).is_allowed());
    });
    assert!(first.is_empty(), "allowed interactions must not warn: {first}");

    let denied = warnings_during(|| {
        assert!(!gate.try_send_solidary(&abc, &alice, t0()).is_allowed());
        assert!(!gate.try_evaluate(&abc, &alice, t0()).is_allowed());
    });
    assert!(denied.contains("interaction denied"), "{denied}");
    assert!(denied.contains("ALREADY_SENT"), "{denied}");
    assert!(denied.contains("COOLDOWN_ACTIVE"), "{denied}");
    assert!(denied.contains("WARN"), "{denied}");
}

#[test]
fn blocked_pair_denials_are_warnings_but_repeat_reports_are_not() {
    let gate = gate();
    let (abc, alice) = (plate("ABC1234"), UserId::from("alice"));
    assert!(gate.report(&abc, &alice, t0()).is_allowed());

    let repeat = warnings_during(|| {
        assert!(gate.report(&abc, &alice, t0()).is_allowed());
    });
    assert!(repeat.is_empty(), "idempotent re-report must not warn: {repeat}");

    let blocked = warnings_during(|| {
        assert!(!gate.try_send_message(&abc, &alice, t0()).is_allowed());
    });
    assert!(blocked.contains("PERMANENTLY_BLOCKED"), "{blocked}");
}
