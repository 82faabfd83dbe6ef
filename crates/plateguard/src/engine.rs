//! PolicyEngine: owns the stores and every component, one method per user
//! action.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

use plateguard_alerts::{AlertStatus, StolenAlertLifecycle};
use plateguard_benefits::{BenefitCycleTracker, Entitlement};
use plateguard_classify::{CategoryClassifier, TierProgress};
use plateguard_core::config::PlateguardConfig;
use plateguard_core::errors::{AlertError, PlateguardError, PlateguardResult};
use plateguard_core::models::{
    ArchiveReason, BenefitKind, Category, GateDecision, InteractionRecord, Plate, ScoreAxis,
    ScoreHistoryEntry, StolenAlertInfo, Timestamp, UserId, UserRecord, VehicleRecord,
};
use plateguard_core::traits::{IEntityStore, ILedgerStore};
use plateguard_decay::{DecayEngine, DecayOutcome};
use plateguard_gate::InteractionGate;
use plateguard_observability::tracing_setup::events;
use plateguard_observability::{
    alert_span, benefit_span, decay_span, gate_span, init_tracing, verification_span,
};
use plateguard_storage::{open_ledger, InMemoryEntityStore};
use plateguard_verification::VerificationCodeService;

use crate::options::EngineOptions;

/// The policy engine.
///
/// Entity reads and writes go through [`IEntityStore::update_user`] /
/// [`IEntityStore::update_vehicle`], so each action's read-modify-write on
/// a record is atomic and leaves the record untouched when it fails.
pub struct PolicyEngine {
    config: PlateguardConfig,
    ledger: Arc<dyn ILedgerStore>,
    entities: Arc<dyn IEntityStore>,
    classifier: CategoryClassifier,
    gate: InteractionGate,
    benefits: BenefitCycleTracker,
    alerts: StolenAlertLifecycle,
    verification: VerificationCodeService,
    decay: DecayEngine,
}

impl PolicyEngine {
    /// Build an engine from the given options.
    pub fn new(opts: EngineOptions) -> PlateguardResult<Self> {
        let config = match (opts.config, &opts.config_toml) {
            (Some(config), _) => {
                config.validate()?;
                config
            }
            (None, Some(toml_str)) => PlateguardConfig::from_toml(toml_str)?,
            (None, None) => PlateguardConfig::default(),
        };

        if opts.init_tracing {
            init_tracing(&config.observability);
        }

        let classifier = CategoryClassifier::from_config(&config.classification)?;

        let ledger = match opts.ledger {
            Some(ledger) => ledger,
            None => open_ledger(&config.storage)?,
        };
        let entities: Arc<dyn IEntityStore> = match opts.entities {
            Some(entities) => entities,
            None => Arc::new(InMemoryEntityStore::new()),
        };

        let gate = InteractionGate::new(Arc::clone(&ledger), &config.gate);
        let benefits = BenefitCycleTracker::new(&config.benefits);
        let alerts = StolenAlertLifecycle::new(&config.alerts);
        let verification = match opts.code_generator {
            Some(generator) => {
                VerificationCodeService::with_generator(&config.verification, generator)
            }
            None => VerificationCodeService::new(&config.verification),
        };
        let decay = match opts.decay_policy {
            Some(policy) => DecayEngine::with_policy(policy),
            None => DecayEngine::from_config(&config.decay)?,
        };

        events::config_loaded(&config.storage.backend, decay.policy_name());

        Ok(Self {
            config,
            ledger,
            entities,
            classifier,
            gate,
            benefits,
            alerts,
            verification,
            decay,
        })
    }

    /// Build an engine from a TOML config file.
    pub fn from_config_file(path: &Path) -> PlateguardResult<Self> {
        let config = PlateguardConfig::load(path)?;
        Self::new(EngineOptions::default().with_config(config))
    }

    pub fn config(&self) -> &PlateguardConfig {
        &self.config
    }

    pub fn ledger(&self) -> &Arc<dyn ILedgerStore> {
        &self.ledger
    }

    pub fn entities(&self) -> &Arc<dyn IEntityStore> {
        &self.entities
    }

    pub fn gate(&self) -> &InteractionGate {
        &self.gate
    }

    pub fn classifier(&self) -> &CategoryClassifier {
        &self.classifier
    }

    pub fn benefits(&self) -> &BenefitCycleTracker {
        &self.benefits
    }

    pub fn alerts(&self) -> &StolenAlertLifecycle {
        &self.alerts
    }

    // --- Interactions ---

    pub fn send_message(&self, plate: &Plate, user_id: &UserId, now: Timestamp) -> GateDecision {
        let _span = gate_span!("message", plate, user_id).entered();
        let decision = self.gate.try_send_message(plate, user_id, now);
        events::gate_decision("message", &decision);
        decision
    }

    pub fn send_evaluation(&self, plate: &Plate, user_id: &UserId, now: Timestamp) -> GateDecision {
        let _span = gate_span!("evaluation", plate, user_id).entered();
        let decision = self.gate.try_evaluate(plate, user_id, now);
        events::gate_decision("evaluation", &decision);
        decision
    }

    pub fn send_solidary(&self, plate: &Plate, user_id: &UserId, now: Timestamp) -> GateDecision {
        let _span = gate_span!("solidary", plate, user_id).entered();
        let decision = self.gate.try_send_solidary(plate, user_id, now);
        events::gate_decision("solidary", &decision);
        decision
    }

    /// Permanently block `plate` for `user_id`.
    pub fn report(&self, plate: &Plate, user_id: &UserId, now: Timestamp) -> GateDecision {
        let _span = gate_span!("report", plate, user_id).entered();
        let decision = self.gate.report(plate, user_id, now);
        events::gate_decision("report", &decision);
        decision
    }

    pub fn reported_plates(&self, user_id: &UserId) -> PlateguardResult<BTreeSet<Plate>> {
        observe("reported_plates", self.gate.reported_plates(user_id))
    }

    pub fn interaction_history(
        &self,
        plate: &Plate,
        user_id: &UserId,
    ) -> PlateguardResult<Vec<InteractionRecord>> {
        observe(
            "interaction_history",
            self.gate.interaction_history(plate, user_id),
        )
    }

    // --- Seal benefits ---

    /// Renew the cycle if due and use one credit. Returns the credits left.
    pub fn consume_benefit(
        &self,
        user_id: &UserId,
        kind: BenefitKind,
        now: Timestamp,
    ) -> PlateguardResult<u32> {
        let _span = benefit_span!(kind, user_id).entered();
        let mut remaining = 0;
        let result = self.entities.update_user(user_id, &mut |user: &mut UserRecord| {
            remaining = self.benefits.redeem(user, kind, now)?;
            Ok(())
        });
        observe("consume_benefit", result)?;
        events::benefit_redeemed(&kind.to_string(), remaining);
        Ok(remaining)
    }

    /// The user's entitlements as they would stand at `now`, with any
    /// due renewal applied and persisted.
    pub fn benefit_overview(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> PlateguardResult<Vec<Entitlement>> {
        let result = self.entities.update_user(user_id, &mut |user: &mut UserRecord| {
            for kind in [BenefitKind::TheftAlert, BenefitKind::SupportCall] {
                self.benefits.maybe_renew_cycle(user, kind, now);
            }
            Ok(())
        });
        let user = observe("benefit_overview", result)?;
        Ok(self.benefits.entitlements(&user))
    }

    // --- Stolen alert ---

    /// Start (or repurchase) the paid theft alert on a vehicle.
    pub fn activate_stolen_alert(
        &self,
        plate: &Plate,
        now: Timestamp,
    ) -> PlateguardResult<StolenAlertInfo> {
        let _span = alert_span!("activate", plate).entered();
        let mut info = None;
        let result = self.entities.update_vehicle(plate, &mut |vehicle: &mut VehicleRecord| {
            info = Some(self.alerts.activate(vehicle, now));
            Ok(())
        });
        let vehicle = observe("activate_stolen_alert", result)?;
        let info = info.or(vehicle.stolen_alert).ok_or_else(|| {
            PlateguardError::from(AlertError::NotActivated {
                plate: plate.to_string(),
            })
        })?;
        events::alert_changed("activate", &info.expires_at.to_rfc3339());
        Ok(info)
    }

    /// Use the single free renewal on a vehicle's alert.
    pub fn renew_stolen_alert_free(
        &self,
        plate: &Plate,
        now: Timestamp,
    ) -> PlateguardResult<StolenAlertInfo> {
        let _span = alert_span!("renew_free", plate).entered();
        let result = self.entities.update_vehicle(plate, &mut |vehicle: &mut VehicleRecord| {
            self.alerts.renew_vehicle_free(vehicle, now)?;
            Ok(())
        });
        let vehicle = observe("renew_stolen_alert_free", result)?;
        let info = vehicle.stolen_alert.ok_or_else(|| {
            PlateguardError::from(AlertError::NotActivated {
                plate: plate.to_string(),
            })
        })?;
        events::alert_changed("renew_free", &info.expires_at.to_rfc3339());
        Ok(info)
    }

    /// Current alert status, refreshing the stored `is_active` cache.
    pub fn stolen_alert_status(
        &self,
        plate: &Plate,
        now: Timestamp,
    ) -> PlateguardResult<Option<AlertStatus>> {
        let result = self.entities.update_vehicle(plate, &mut |vehicle: &mut VehicleRecord| {
            if let Some(info) = vehicle.stolen_alert.as_mut() {
                self.alerts.refresh(info, now);
            }
            Ok(())
        });
        let vehicle = observe("stolen_alert_status", result)?;
        Ok(vehicle
            .stolen_alert
            .as_ref()
            .map(|info| self.alerts.status(info, now)))
    }

    // --- Verification ---

    /// Issue a new code for delivery to the user's contact.
    pub fn issue_verification_code(
        &self,
        user_id: &UserId,
        now: Timestamp,
    ) -> PlateguardResult<String> {
        let _span = verification_span!("issue", user_id).entered();
        let mut code = String::new();
        let result = self.entities.update_user(user_id, &mut |user: &mut UserRecord| {
            code = self.verification.generate(user, now);
            Ok(())
        });
        observe("issue_verification_code", result)?;
        Ok(code)
    }

    /// Check a supplied code. Success consumes the code.
    pub fn verify_code(
        &self,
        user_id: &UserId,
        supplied: &str,
        now: Timestamp,
    ) -> PlateguardResult<()> {
        let _span = verification_span!("verify", user_id).entered();
        let result = self.entities.update_user(user_id, &mut |user: &mut UserRecord| {
            self.verification.verify(user, supplied, now)?;
            Ok(())
        });
        observe("verify_code", result).map(|_| ())
    }

    // --- Scores ---

    pub fn classify(&self, score: i64, axis: ScoreAxis) -> Category {
        self.classifier.classify(score, axis)
    }

    pub fn classify_plate(&self, plate: &Plate) -> PlateguardResult<Category> {
        let vehicle = self.require_vehicle(plate)?;
        Ok(self.classifier.classify(vehicle.score, ScoreAxis::Plate))
    }

    pub fn classify_user(&self, user_id: &UserId) -> PlateguardResult<Category> {
        let user = self.require_user(user_id)?;
        Ok(self.classifier.classify(user.icc, ScoreAxis::Icc))
    }

    pub fn plate_progress(&self, plate: &Plate) -> PlateguardResult<TierProgress> {
        let vehicle = self.require_vehicle(plate)?;
        Ok(self.classifier.progress(vehicle.score, ScoreAxis::Plate))
    }

    pub fn user_progress(&self, user_id: &UserId) -> PlateguardResult<TierProgress> {
        let user = self.require_user(user_id)?;
        Ok(self.classifier.progress(user.icc, ScoreAxis::Icc))
    }

    /// Apply the configured decay policy to a vehicle's Plate Score.
    pub fn decay_vehicle(&self, plate: &Plate, now: Timestamp) -> PlateguardResult<DecayOutcome> {
        let _span = decay_span!(self.decay.policy_name()).entered();
        let mut outcome = None;
        let result = self.entities.update_vehicle(plate, &mut |vehicle: &mut VehicleRecord| {
            outcome = Some(self.decay.apply_to_vehicle(vehicle, now));
            Ok(())
        });
        let vehicle = observe("decay_vehicle", result)?;
        Ok(outcome.unwrap_or(DecayOutcome {
            axis: ScoreAxis::Plate,
            before: vehicle.score,
            after: vehicle.score,
        }))
    }

    /// Apply the configured decay policy to a user's ICC.
    pub fn decay_user(&self, user_id: &UserId, now: Timestamp) -> PlateguardResult<DecayOutcome> {
        let _span = decay_span!(self.decay.policy_name()).entered();
        let mut outcome = None;
        let result = self.entities.update_user(user_id, &mut |user: &mut UserRecord| {
            outcome = Some(self.decay.apply_to_user(user, now));
            Ok(())
        });
        let user = observe("decay_user", result)?;
        Ok(outcome.unwrap_or(DecayOutcome {
            axis: ScoreAxis::Icc,
            before: user.icc,
            after: user.icc,
        }))
    }

    /// Snapshot a plate's score into its history before a claim or
    /// transfer changes hands.
    pub fn archive_plate_score(
        &self,
        plate: &Plate,
        reason: ArchiveReason,
        now: Timestamp,
    ) -> PlateguardResult<ScoreHistoryEntry> {
        let result = self.entities.update_vehicle(plate, &mut |vehicle: &mut VehicleRecord| {
            let entry = self.classifier.snapshot(vehicle.score, reason, now);
            vehicle.score_history.push(entry);
            Ok(())
        });
        let vehicle = observe("archive_plate_score", result)?;
        vehicle.score_history.last().cloned().ok_or_else(|| PlateguardError::NotFound {
            entity: "score history".to_string(),
            id: plate.to_string(),
        })
    }

    fn require_vehicle(&self, plate: &Plate) -> PlateguardResult<VehicleRecord> {
        self.entities
            .get_vehicle(plate)?
            .ok_or_else(|| PlateguardError::NotFound {
                entity: "vehicle".to_string(),
                id: plate.to_string(),
            })
    }

    fn require_user(&self, user_id: &UserId) -> PlateguardResult<UserRecord> {
        self.entities
            .get_user(user_id)?
            .ok_or_else(|| PlateguardError::NotFound {
                entity: "user".to_string(),
                id: user_id.to_string(),
            })
    }
}

/// Log a failed result with its error code and pass it through.
fn observe<T>(operation: &str, result: PlateguardResult<T>) -> PlateguardResult<T> {
    if let Err(e) = &result {
        events::operation_failed(operation, e);
    }
    result
}
