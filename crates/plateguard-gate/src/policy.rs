//! Pure admission rules over one `(plate, user)` pair's ledger records.

use chrono::{DateTime, Duration, Utc};

use plateguard_core::models::{
    DenyReason, GateDecision, InteractionKind, InteractionRecord, Timestamp,
};

/// True iff a report exists for the pair. Never expires.
pub fn is_reported(records: &[InteractionRecord]) -> bool {
    records.iter().any(|r| r.kind == InteractionKind::Report)
}

/// Messages are refused only by a report.
pub fn message_decision(records: &[InteractionRecord]) -> GateDecision {
    if is_reported(records) {
        return GateDecision::Denied(DenyReason::PermanentlyBlocked);
    }
    GateDecision::Allowed
}

/// Evaluations are refused by a report, or by an evaluation newer than
/// `now - cooldown`. The retry time is the latest such evaluation plus the
/// cooldown. When `now - cooldown` underflows every evaluation counts, and
/// a retry time past the representable range saturates.
pub fn evaluation_decision(
    records: &[InteractionRecord],
    now: Timestamp,
    cooldown: Duration,
) -> GateDecision {
    if is_reported(records) {
        return GateDecision::Denied(DenyReason::PermanentlyBlocked);
    }
    let window_start = now.checked_sub_signed(cooldown);
    let latest = records
        .iter()
        .filter(|r| r.kind == InteractionKind::Evaluation)
        .filter(|r| window_start.map_or(true, |start| r.timestamp > start))
        .map(|r| r.timestamp)
        .max();
    match latest {
        Some(last) => GateDecision::Denied(DenyReason::CooldownActive {
            retry_at: last
                .checked_add_signed(cooldown)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        }),
        None => GateDecision::Allowed,
    }
}

/// One solidarity alert per pair, ever.
pub fn solidary_decision(records: &[InteractionRecord]) -> GateDecision {
    if is_reported(records) {
        return GateDecision::Denied(DenyReason::PermanentlyBlocked);
    }
    if records.iter().any(|r| r.kind == InteractionKind::Solidary) {
        return GateDecision::Denied(DenyReason::AlreadySent);
    }
    GateDecision::Allowed
}

/// Reports are always accepted; a pair already reported needs no second
/// record.
pub fn report_decision(records: &[InteractionRecord]) -> GateDecision {
    if is_reported(records) {
        return GateDecision::Denied(DenyReason::PermanentlyBlocked);
    }
    GateDecision::Allowed
}
