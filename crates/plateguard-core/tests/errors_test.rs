use chrono::{TimeZone, Utc};
use plateguard_core::errors::*;
use plateguard_core::models::{BenefitKind, DenyReason};

#[test]
fn every_error_has_a_code() {
    let codes = [
        StorageError::Unavailable {
            reason: "down".into(),
        }
        .error_code(),
        BenefitError::NoCreditsRemaining {
            kind: BenefitKind::TheftAlert,
            used: 1,
            cap: 1,
        }
        .error_code(),
        AlertError::RenewalAlreadyUsed.error_code(),
        VerificationError::CodeExpired.error_code(),
        ConfigError::FileNotFound { path: "/x".into() }.error_code(),
        DenyReason::AlreadySent.error_code(),
    ];
    for code in codes {
        assert!(!code.is_empty());
    }
}

#[test]
fn deny_reasons_map_to_distinct_codes() {
    let retry_at = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
    assert_eq!(
        DenyReason::PermanentlyBlocked.error_code(),
        error_code::PERMANENTLY_BLOCKED
    );
    assert_eq!(
        DenyReason::CooldownActive { retry_at }.error_code(),
        error_code::COOLDOWN_ACTIVE
    );
    assert_eq!(DenyReason::AlreadySent.error_code(), error_code::ALREADY_SENT);
    assert_eq!(
        DenyReason::StoreUnavailable.error_code(),
        error_code::STORE_UNAVAILABLE
    );
}

#[test]
fn cooldown_message_carries_retry_time() {
    let retry_at = Utc.with_ymd_and_hms(2024, 1, 2, 8, 30, 0).unwrap();
    let msg = DenyReason::CooldownActive { retry_at }.to_string();
    assert!(msg.contains("2024-01-02T08:30:00"));
}

#[test]
fn from_conversions_preserve_codes() {
    let err: PlateguardError = VerificationError::CodeMismatch.into();
    assert!(matches!(
        err,
        PlateguardError::Verification(VerificationError::CodeMismatch)
    ));
    assert_eq!(err.error_code(), error_code::CODE_MISMATCH);

    let err: PlateguardError = AlertError::RenewalAlreadyUsed.into();
    assert_eq!(err.error_code(), error_code::RENEWAL_ALREADY_USED);

    let err = PlateguardError::InteractionDenied(DenyReason::PermanentlyBlocked);
    assert_eq!(err.error_code(), error_code::PERMANENTLY_BLOCKED);
}

#[test]
fn only_storage_errors_are_store_faults() {
    let fault: PlateguardError = StorageError::CorruptionDetected {
        details: "bad row".into(),
    }
    .into();
    assert!(fault.is_store_fault());
    assert_eq!(fault.error_code(), error_code::STORE_CORRUPT);

    let denial = PlateguardError::InteractionDenied(DenyReason::AlreadySent);
    assert!(!denial.is_store_fault());
}

#[test]
fn coded_string_prefixes_code() {
    let err = BenefitError::NoCreditsRemaining {
        kind: BenefitKind::SupportCall,
        used: 1,
        cap: 1,
    };
    let s = err.coded_string();
    assert!(s.starts_with("[NO_CREDITS_REMAINING]"));
    assert!(s.contains("support_call"));
}
