use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use plateguard_core::config::AlertConfig;
use plateguard_core::errors::AlertError;
use plateguard_core::models::{StolenAlertInfo, Timestamp, VehicleRecord};

/// Point-in-time view of an alert for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertStatus {
    pub is_active: bool,
    pub days_remaining: i64,
    pub can_renew_free: bool,
}

/// Activation, expiry and free renewal of stolen alerts.
#[derive(Debug, Clone)]
pub struct StolenAlertLifecycle {
    duration: Duration,
    renewal_window_days: i64,
}

impl StolenAlertLifecycle {
    pub fn new(config: &AlertConfig) -> Self {
        Self {
            duration: Duration::try_days(config.duration_days).unwrap_or(Duration::MAX),
            renewal_window_days: config.free_renewal_window_days,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// `now + duration`, saturating at the latest representable instant.
    fn expiry_from(&self, now: Timestamp) -> Timestamp {
        now.checked_add_signed(self.duration).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Start a fresh paid alert on `vehicle`, replacing any previous one.
    /// A repurchase therefore resets `renewal_used`.
    pub fn activate(&self, vehicle: &mut VehicleRecord, now: Timestamp) -> StolenAlertInfo {
        let info = StolenAlertInfo {
            activated_at: now,
            expires_at: self.expiry_from(now),
            renewal_used: false,
            is_active: true,
        };
        if vehicle.stolen_alert.is_some() {
            info!(plate = %vehicle.plate, "stolen alert repurchased");
        } else {
            info!(plate = %vehicle.plate, "stolen alert activated");
        }
        vehicle.stolen_alert = Some(info.clone());
        info
    }

    pub fn is_active(&self, info: &StolenAlertInfo, now: Timestamp) -> bool {
        now < info.expires_at
    }

    /// Whole days left, rounded up, never negative. Positive exactly when
    /// [`Self::is_active`] holds.
    pub fn days_remaining(&self, info: &StolenAlertInfo, now: Timestamp) -> i64 {
        let left = info.expires_at - now;
        if left <= Duration::zero() {
            return 0;
        }
        let whole = left.num_days();
        if left > Duration::days(whole) {
            whole + 1
        } else {
            whole
        }
    }

    /// Open while the single free renewal is unused and the alert is within
    /// the renewal window of expiry, or already expired.
    pub fn can_renew_free(&self, info: &StolenAlertInfo, now: Timestamp) -> bool {
        !info.renewal_used && self.days_remaining(info, now) <= self.renewal_window_days
    }

    /// Extend the alert by the standard duration from `now` and mark the
    /// free renewal used.
    pub fn renew_free(
        &self,
        info: &StolenAlertInfo,
        now: Timestamp,
    ) -> Result<StolenAlertInfo, AlertError> {
        if info.renewal_used {
            return Err(AlertError::RenewalAlreadyUsed);
        }
        let days_remaining = self.days_remaining(info, now);
        if days_remaining > self.renewal_window_days {
            return Err(AlertError::RenewalWindowNotOpen {
                days_remaining,
                window_days: self.renewal_window_days,
            });
        }
        let renewed = StolenAlertInfo {
            activated_at: info.activated_at,
            expires_at: self.expiry_from(now),
            renewal_used: true,
            is_active: true,
        };
        debug!(expires_at = %renewed.expires_at, "stolen alert renewed free");
        Ok(renewed)
    }

    /// [`Self::renew_free`] applied to the alert stored on `vehicle`.
    pub fn renew_vehicle_free(
        &self,
        vehicle: &mut VehicleRecord,
        now: Timestamp,
    ) -> Result<StolenAlertInfo, AlertError> {
        let current = vehicle
            .stolen_alert
            .as_ref()
            .ok_or_else(|| AlertError::NotActivated {
                plate: vehicle.plate.to_string(),
            })?;
        let renewed = self.renew_free(current, now)?;
        vehicle.stolen_alert = Some(renewed.clone());
        info!(plate = %vehicle.plate, "stolen alert free renewal used");
        Ok(renewed)
    }

    /// Recompute the cached `is_active` flag. Returns true if it changed.
    pub fn refresh(&self, info: &mut StolenAlertInfo, now: Timestamp) -> bool {
        let active = self.is_active(info, now);
        let changed = info.is_active != active;
        info.is_active = active;
        changed
    }

    pub fn status(&self, info: &StolenAlertInfo, now: Timestamp) -> AlertStatus {
        AlertStatus {
            is_active: self.is_active(info, now),
            days_remaining: self.days_remaining(info, now),
            can_renew_free: self.can_renew_free(info, now),
        }
    }
}
