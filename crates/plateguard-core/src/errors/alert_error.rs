use super::error_code::{self, PlateguardErrorCode};

/// Stolen-alert lifecycle errors.
#[derive(Debug, thiserror::Error)]
pub enum AlertError {
    #[error("free renewal already used; repurchase required")]
    RenewalAlreadyUsed,

    #[error("free renewal not open yet: {days_remaining} days remaining, window is {window_days} days")]
    RenewalWindowNotOpen { days_remaining: i64, window_days: i64 },

    #[error("no stolen alert activated for plate {plate}")]
    NotActivated { plate: String },
}

impl PlateguardErrorCode for AlertError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RenewalAlreadyUsed => error_code::RENEWAL_ALREADY_USED,
            Self::RenewalWindowNotOpen { .. } => error_code::RENEWAL_WINDOW_NOT_OPEN,
            Self::NotActivated { .. } => error_code::ALERT_NOT_ACTIVATED,
        }
    }
}
