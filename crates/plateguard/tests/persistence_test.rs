//! Engine wiring from config files, the SQLite backend, and the shared
//! gate walkthrough.

use chrono::Duration;
use serde::Deserialize;

use plateguard::core::errors::PlateguardErrorCode;
use plateguard::core::models::{GateDecision, UserId};
use plateguard::core::traits::ILedgerStore;
use plateguard::core::PlateguardConfig;
use plateguard::{EngineOptions, PolicyEngine};
use test_fixtures::{load_fixture, plate, t0};

fn sqlite_config(db_path: &std::path::Path) -> PlateguardConfig {
    let mut config = PlateguardConfig::default();
    config.storage.backend = "sqlite".to_string();
    config.storage.db_path = db_path.display().to_string();
    config
}

#[test]
fn sqlite_ledger_survives_engine_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("ledger.db");
    let p = plate("ABC1234");
    let u = UserId::from("alice");

    {
        let engine =
            PolicyEngine::new(EngineOptions::default().with_config(sqlite_config(&db))).unwrap();
        assert!(engine.send_solidary(&p, &u, t0()).is_allowed());
        assert!(engine.report(&p, &u, t0()).is_allowed());
    }

    let engine =
        PolicyEngine::new(EngineOptions::default().with_config(sqlite_config(&db))).unwrap();
    assert_eq!(engine.ledger().len().unwrap(), 2);
    assert!(!engine.send_solidary(&plate("ABC1234"), &u, t0()).is_allowed());
    assert!(engine.reported_plates(&u).unwrap().contains(&p));
}

#[test]
fn engine_loads_from_a_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("plateguard.toml");
    let db = dir.path().join("from_file.db");
    let toml = format!(
        "[gate]\nevaluation_cooldown_secs = 3600\n\n[storage]\nbackend = \"sqlite\"\ndb_path = {:?}\n",
        db.display().to_string()
    );
    std::fs::write(&config_path, toml).unwrap();

    let engine = PolicyEngine::from_config_file(&config_path).unwrap();
    assert_eq!(engine.config().gate.evaluation_cooldown_secs, 3600);
    assert_eq!(engine.gate().cooldown(), Duration::hours(1));

    let p = plate("ABC1234");
    let u = UserId::from("alice");
    assert!(engine.send_evaluation(&p, &u, t0()).is_allowed());
    assert!(!engine.send_evaluation(&p, &u, t0() + Duration::minutes(59)).is_allowed());
    assert!(engine.send_evaluation(&p, &u, t0() + Duration::minutes(61)).is_allowed());
    assert!(db.exists());
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PolicyEngine::from_config_file(&dir.path().join("absent.toml")).err().unwrap();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[derive(Debug, Deserialize)]
struct Scenario {
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    action: String,
    plate: String,
    user: String,
    offset_secs: i64,
    expect: String,
}

fn replay(engine: &PolicyEngine) {
    let scenario: Scenario = load_fixture("scenarios/gate_walkthrough.json");
    for (i, step) in scenario.steps.iter().enumerate() {
        let p = plate(&step.plate);
        let u = UserId::from(step.user.as_str());
        let now = t0() + Duration::seconds(step.offset_secs);
        let decision = match step.action.as_str() {
            "message" => engine.send_message(&p, &u, now),
            "evaluation" => engine.send_evaluation(&p, &u, now),
            "solidary" => engine.send_solidary(&p, &u, now),
            "report" => engine.report(&p, &u, now),
            other => panic!("unknown action {other}"),
        };
        let outcome = match decision {
            GateDecision::Allowed => "allowed".to_string(),
            GateDecision::Denied(reason) => reason.error_code().to_ascii_lowercase(),
        };
        assert_eq!(outcome, step.expect, "step {i}: {step:?}");
    }
}

#[test]
fn walkthrough_through_the_engine_in_memory() {
    replay(&PolicyEngine::new(EngineOptions::default()).unwrap());
}

#[test]
fn walkthrough_through_the_engine_on_sqlite() {
    let dir = tempfile::tempdir().unwrap();
    let config = sqlite_config(&dir.path().join("walkthrough.db"));
    replay(&PolicyEngine::new(EngineOptions::default().with_config(config)).unwrap());
}
