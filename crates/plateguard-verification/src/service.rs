use chrono::Duration;
use dashmap::DashMap;
use tracing::{debug, warn};

use plateguard_core::config::VerificationConfig;
use plateguard_core::errors::VerificationError;
use plateguard_core::models::{Timestamp, UserId, UserRecord, VerificationCode};
use plateguard_core::traits::ICodeGenerator;

use crate::check::check_code;
use crate::generator::RandomDigits;

/// Issues one active code per user and verifies attempts against it.
///
/// Mismatches are counted per user; after `max_failed_attempts` of them
/// every attempt fails with `TooManyAttempts` until a new code is issued.
/// Expired codes do not count against the limit.
pub struct VerificationCodeService {
    config: VerificationConfig,
    generator: Box<dyn ICodeGenerator>,
    failed_attempts: DashMap<UserId, u32>,
}

impl VerificationCodeService {
    pub fn new(config: &VerificationConfig) -> Self {
        Self::with_generator(config, Box::new(RandomDigits))
    }

    pub fn with_generator(config: &VerificationConfig, generator: Box<dyn ICodeGenerator>) -> Self {
        Self {
            config: config.clone(),
            generator,
            failed_attempts: DashMap::new(),
        }
    }

    pub fn ttl(&self) -> Duration {
        Duration::try_seconds(self.config.ttl_secs).unwrap_or(Duration::MAX)
    }

    /// Issue a new code on `user`, replacing any previous one, and reset the
    /// failed-attempt count. Returns the code for delivery.
    pub fn generate(&self, user: &mut UserRecord, now: Timestamp) -> String {
        let code = self.generator.generate(self.config.code_length);
        user.verification = Some(VerificationCode {
            code: code.clone(),
            created_at: now,
        });
        self.failed_attempts.remove(&user.id);
        debug!(user_id = %user.id, "verification code issued");
        code
    }

    /// Verify `supplied` for `user`. A successful check consumes the code.
    pub fn verify(
        &self,
        user: &mut UserRecord,
        supplied: &str,
        now: Timestamp,
    ) -> Result<(), VerificationError> {
        let limit = self.config.max_failed_attempts;
        let attempts = self.failed_attempts(&user.id);
        if limit > 0 && attempts >= limit {
            warn!(user_id = %user.id, attempts, "verification locked out");
            return Err(VerificationError::TooManyAttempts { attempts });
        }

        match check_code(user.verification.as_ref(), supplied, now, self.ttl()) {
            Ok(()) => {
                user.verification = None;
                self.failed_attempts.remove(&user.id);
                debug!(user_id = %user.id, "verification succeeded");
                Ok(())
            }
            Err(VerificationError::CodeMismatch) => {
                let mut count = self.failed_attempts.entry(user.id.clone()).or_insert(0);
                *count += 1;
                debug!(user_id = %user.id, attempts = *count, "verification code mismatch");
                Err(VerificationError::CodeMismatch)
            }
            Err(e) => {
                debug!(user_id = %user.id, error = %e, "verification failed");
                Err(e)
            }
        }
    }

    /// Mismatches recorded against the user's current code.
    pub fn failed_attempts(&self, user_id: &UserId) -> u32 {
        self.failed_attempts.get(user_id).map(|c| *c).unwrap_or(0)
    }
}
