use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, error, instrument, warn};

use plateguard_core::config::GateConfig;
use plateguard_core::errors::{PlateguardErrorCode, PlateguardResult};
use plateguard_core::models::{
    DenyReason, GateDecision, InteractionKind, InteractionRecord, LedgerFilter, Plate, Timestamp,
    UserId,
};
use plateguard_core::traits::ILedgerStore;

use crate::policy;

/// Interaction policy over an injected ledger.
///
/// Predicates (`is_reported`, `can_*`) never fail: a ledger fault is logged
/// and treated as a denial. `record_*` append without checking and are for
/// callers that already serialize per pair; `try_*` check and append as one
/// unit.
pub struct InteractionGate {
    ledger: Arc<dyn ILedgerStore>,
    cooldown: Duration,
}

impl InteractionGate {
    pub fn new(ledger: Arc<dyn ILedgerStore>, config: &GateConfig) -> Self {
        Self {
            ledger,
            cooldown: Duration::try_seconds(config.evaluation_cooldown_secs)
                .unwrap_or(Duration::MAX),
        }
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }

    pub fn ledger(&self) -> &Arc<dyn ILedgerStore> {
        &self.ledger
    }

    fn pair_records(
        &self,
        plate: &Plate,
        user_id: &UserId,
    ) -> PlateguardResult<Vec<InteractionRecord>> {
        self.ledger.query_by_plate_and_user(plate, user_id)
    }

    /// Read the pair and apply `rule`, failing closed on a ledger fault.
    fn decide(
        &self,
        action: &'static str,
        plate: &Plate,
        user_id: &UserId,
        rule: impl Fn(&[InteractionRecord]) -> GateDecision,
    ) -> GateDecision {
        let decision = match self.pair_records(plate, user_id) {
            Ok(records) => rule(&records),
            Err(e) => {
                error!(
                    action, plate = %plate, user_id = %user_id, error = %e,
                    "ledger read failed, denying"
                );
                GateDecision::Denied(DenyReason::StoreUnavailable)
            }
        };
        log_decision(action, plate, user_id, &decision);
        decision
    }

    /// True iff `user_id` reported `plate`. A ledger fault counts as reported.
    pub fn is_reported(&self, plate: &Plate, user_id: &UserId) -> bool {
        match self.pair_records(plate, user_id) {
            Ok(records) => policy::is_reported(&records),
            Err(e) => {
                error!(
                    plate = %plate, user_id = %user_id, error = %e,
                    "ledger read failed, assuming reported"
                );
                true
            }
        }
    }

    pub fn can_send_message(&self, plate: &Plate, user_id: &UserId) -> GateDecision {
        self.decide("message", plate, user_id, policy::message_decision)
    }

    pub fn can_evaluate(&self, plate: &Plate, user_id: &UserId, now: Timestamp) -> GateDecision {
        let cooldown = self.cooldown;
        self.decide("evaluation", plate, user_id, |records| {
            policy::evaluation_decision(records, now, cooldown)
        })
    }

    pub fn can_send_solidary(&self, plate: &Plate, user_id: &UserId) -> GateDecision {
        self.decide("solidary", plate, user_id, policy::solidary_decision)
    }

    fn record(
        &self,
        plate: &Plate,
        user_id: &UserId,
        kind: InteractionKind,
        now: Timestamp,
    ) -> PlateguardResult<InteractionRecord> {
        let record = InteractionRecord::new(plate.clone(), user_id.clone(), kind, now);
        self.ledger.append(&record)?;
        Ok(record)
    }

    pub fn record_message(
        &self,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
    ) -> PlateguardResult<InteractionRecord> {
        self.record(plate, user_id, InteractionKind::Message, now)
    }

    pub fn record_evaluation(
        &self,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
    ) -> PlateguardResult<InteractionRecord> {
        self.record(plate, user_id, InteractionKind::Evaluation, now)
    }

    pub fn record_solidary(
        &self,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
    ) -> PlateguardResult<InteractionRecord> {
        self.record(plate, user_id, InteractionKind::Solidary, now)
    }

    pub fn record_report(
        &self,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
    ) -> PlateguardResult<InteractionRecord> {
        self.record(plate, user_id, InteractionKind::Report, now)
    }

    /// Check and append in one ledger operation. A fault in either step is
    /// a `StoreUnavailable` denial.
    fn append_checked(
        &self,
        kind: InteractionKind,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
        rule: &dyn Fn(&[InteractionRecord]) -> GateDecision,
    ) -> GateDecision {
        let record = InteractionRecord::new(plate.clone(), user_id.clone(), kind, now);
        match self.ledger.append_if(&record, rule) {
            Ok(decision) => decision,
            Err(e) => {
                error!(
                    action = kind.as_str(), plate = %plate, user_id = %user_id, error = %e,
                    "ledger check-and-append failed, denying"
                );
                GateDecision::Denied(DenyReason::StoreUnavailable)
            }
        }
    }

    fn try_record(
        &self,
        kind: InteractionKind,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
        rule: &dyn Fn(&[InteractionRecord]) -> GateDecision,
    ) -> GateDecision {
        let decision = self.append_checked(kind, plate, user_id, now, rule);
        log_decision(kind.as_str(), plate, user_id, &decision);
        decision
    }

    #[instrument(skip_all, fields(plate = %plate, user_id = %user_id))]
    pub fn try_send_message(
        &self,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
    ) -> GateDecision {
        self.try_record(InteractionKind::Message, plate, user_id, now, &policy::message_decision)
    }

    #[instrument(skip_all, fields(plate = %plate, user_id = %user_id))]
    pub fn try_evaluate(&self, plate: &Plate, user_id: &UserId, now: Timestamp) -> GateDecision {
        let cooldown = self.cooldown;
        let rule = |records: &[InteractionRecord]| {
            policy::evaluation_decision(records, now, cooldown)
        };
        self.try_record(InteractionKind::Evaluation, plate, user_id, now, &rule)
    }

    #[instrument(skip_all, fields(plate = %plate, user_id = %user_id))]
    pub fn try_send_solidary(
        &self,
        plate: &Plate,
        user_id: &UserId,
        now: Timestamp,
    ) -> GateDecision {
        self.try_record(InteractionKind::Solidary, plate, user_id, now, &policy::solidary_decision)
    }

    /// Permanently block `plate` for `user_id`. Idempotent: reporting an
    /// already reported pair writes nothing and still returns `Allowed`.
    #[instrument(skip_all, fields(plate = %plate, user_id = %user_id))]
    pub fn report(&self, plate: &Plate, user_id: &UserId, now: Timestamp) -> GateDecision {
        let kind = InteractionKind::Report;
        let checked = self.append_checked(kind, plate, user_id, now, &policy::report_decision);
        let decision = match checked {
            GateDecision::Denied(DenyReason::PermanentlyBlocked) => GateDecision::Allowed,
            other => other,
        };
        log_decision(kind.as_str(), plate, user_id, &decision);
        decision
    }

    /// Every plate `user_id` has reported.
    pub fn reported_plates(&self, user_id: &UserId) -> PlateguardResult<BTreeSet<Plate>> {
        let reports = self
            .ledger
            .query(&LedgerFilter::user(user_id).with_kind(InteractionKind::Report))?;
        Ok(reports.into_iter().map(|r| r.plate).collect())
    }

    /// The pair's full ledger history, oldest first.
    pub fn interaction_history(
        &self,
        plate: &Plate,
        user_id: &UserId,
    ) -> PlateguardResult<Vec<InteractionRecord>> {
        self.pair_records(plate, user_id)
    }
}

/// Abuse-limit denials are warnings; store faults were already logged as
/// errors where they happened.
fn log_decision(action: &str, plate: &Plate, user_id: &UserId, decision: &GateDecision) {
    match decision {
        GateDecision::Allowed => {
            debug!(action, %plate, %user_id, "interaction allowed")
        }
        GateDecision::Denied(DenyReason::StoreUnavailable) => {
            debug!(action, %plate, %user_id, "interaction denied: ledger unavailable")
        }
        GateDecision::Denied(reason) => {
            let code = reason.error_code();
            warn!(action, %plate, %user_id, code, %reason, "interaction denied")
        }
    }
}
