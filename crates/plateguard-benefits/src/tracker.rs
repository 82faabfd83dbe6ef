use serde::{Deserialize, Serialize};
use tracing::debug;

use plateguard_core::config::BenefitConfig;
use plateguard_core::errors::BenefitError;
use plateguard_core::models::{BenefitKind, Timestamp, UserRecord};

use crate::rules::{rule_for, BenefitRule};
use crate::slot::Slot;

/// What [`BenefitCycleTracker::maybe_renew_cycle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleRenewal {
    /// The user's tier grants nothing of this kind.
    NotEntitled,
    /// No anchor existed; the first cycle starts now.
    Started,
    /// The previous cycle ran its full length; counter reset, anchor = now.
    Renewed,
    /// The current cycle is still running.
    Current,
}

/// One row of a user's benefit overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entitlement {
    pub kind: BenefitKind,
    pub cap: u32,
    pub used: u32,
    pub remaining: u32,
    pub cycle_days: i64,
    /// When the next access renews the cycle. `None` until the first cycle
    /// starts.
    pub renews_at: Option<Timestamp>,
}

/// Tracks consumption of seal entitlements on a [`UserRecord`].
///
/// Operations mutate the record in place; persisting it is the caller's job.
#[derive(Debug, Clone)]
pub struct BenefitCycleTracker {
    config: BenefitConfig,
}

impl BenefitCycleTracker {
    pub fn new(config: &BenefitConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// The rule `user` gets for `kind`, if any.
    pub fn rule(&self, user: &UserRecord, kind: BenefitKind) -> Option<BenefitRule> {
        rule_for(&self.config, user.seal, user.is_client, kind)
    }

    fn entitled(&self, user: &UserRecord, kind: BenefitKind) -> Option<(BenefitRule, Slot)> {
        let rule = self.rule(user, kind)?;
        let slot = Slot::for_seal(user.seal, kind)?;
        Some((rule, slot))
    }

    /// Credits left in the current cycle as stored. Does not renew.
    pub fn remaining_credits(&self, user: &UserRecord, kind: BenefitKind) -> u32 {
        match self.entitled(user, kind) {
            Some((rule, slot)) => rule.cap.saturating_sub(slot.used(&user.benefits)),
            None => 0,
        }
    }

    /// Credits that would be available at `now`, counting a renewal that
    /// has come due but not yet been applied. Read-only.
    pub fn available_credits(&self, user: &UserRecord, kind: BenefitKind, now: Timestamp) -> u32 {
        let Some((rule, slot)) = self.entitled(user, kind) else {
            return 0;
        };
        match slot.anchor(&user.benefits) {
            Some(anchor) if now - anchor >= rule.cycle() => rule.cap,
            _ => rule.cap.saturating_sub(slot.used(&user.benefits)),
        }
    }

    /// Start or renew the cycle for `kind` if due.
    ///
    /// Renewal resets the counter and moves the anchor to `now`, not to
    /// `anchor + cycle`.
    pub fn maybe_renew_cycle(
        &self,
        user: &mut UserRecord,
        kind: BenefitKind,
        now: Timestamp,
    ) -> CycleRenewal {
        let Some((rule, slot)) = self.entitled(user, kind) else {
            return CycleRenewal::NotEntitled;
        };
        match slot.anchor(&user.benefits) {
            None => {
                slot.set_anchor(&mut user.benefits, now);
                debug!(user_id = %user.id, %kind, "benefit cycle started");
                CycleRenewal::Started
            }
            Some(anchor) if now - anchor >= rule.cycle() => {
                slot.set_used(&mut user.benefits, 0);
                slot.set_anchor(&mut user.benefits, now);
                debug!(user_id = %user.id, %kind, previous = %anchor, "benefit cycle renewed");
                CycleRenewal::Renewed
            }
            Some(_) => CycleRenewal::Current,
        }
    }

    /// Use one credit in the current cycle. Returns the credits left.
    ///
    /// Fails with `NoCreditsRemaining` at the cap, leaving the counter
    /// unchanged. Never renews; call [`Self::maybe_renew_cycle`] first.
    pub fn consume_credit(
        &self,
        user: &mut UserRecord,
        kind: BenefitKind,
    ) -> Result<u32, BenefitError> {
        let Some((rule, slot)) = self.entitled(user, kind) else {
            return Err(BenefitError::NoCreditsRemaining {
                kind,
                used: 0,
                cap: 0,
            });
        };
        let used = slot.used(&user.benefits);
        if used >= rule.cap {
            return Err(BenefitError::NoCreditsRemaining {
                kind,
                used,
                cap: rule.cap,
            });
        }
        slot.set_used(&mut user.benefits, used + 1);
        let remaining = rule.cap - used - 1;
        debug!(user_id = %user.id, %kind, remaining, "benefit credit consumed");
        Ok(remaining)
    }

    /// Renew if due, then consume. The usual entry point for a user action.
    pub fn redeem(
        &self,
        user: &mut UserRecord,
        kind: BenefitKind,
        now: Timestamp,
    ) -> Result<u32, BenefitError> {
        self.maybe_renew_cycle(user, kind, now);
        self.consume_credit(user, kind)
    }

    /// Every benefit the user's tier grants, with current usage.
    pub fn entitlements(&self, user: &UserRecord) -> Vec<Entitlement> {
        [BenefitKind::TheftAlert, BenefitKind::SupportCall]
            .into_iter()
            .filter_map(|kind| {
                let (rule, slot) = self.entitled(user, kind)?;
                let used = slot.used(&user.benefits);
                Some(Entitlement {
                    kind,
                    cap: rule.cap,
                    used,
                    remaining: rule.cap.saturating_sub(used),
                    cycle_days: rule.cycle_days,
                    renews_at: slot
                        .anchor(&user.benefits)
                        .and_then(|a| a.checked_add_signed(rule.cycle())),
                })
            })
            .collect()
    }
}
