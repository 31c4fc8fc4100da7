//! Behavior of the always-approved stub build
//! (`--no-default-features`): identical signatures, trivial approval.

#![cfg(not(feature = "fips"))]

use fips_indicator::{
    after_call, before_call, check_approved, is_fips_build, lock_state, unlock_state,
    verify_aead_gcm_indicator, verify_hmac_indicator, AeadAlgorithm, AeadContext, ApprovalStatus,
    DigestKind, StateLock,
};

#[test]
fn reports_non_fips_build() {
    assert!(!is_fips_build());
}

#[test]
fn snapshots_are_fixed() {
    assert_eq!(before_call(), 0);
    assert_eq!(after_call(), 1);

    // Unconditionally, whatever ran in between.
    verify_hmac_indicator(DigestKind::Md5);
    verify_aead_gcm_indicator(&AeadContext::new(AeadAlgorithm::AesGcm, 24, 16));
    assert_eq!(before_call(), 0);
    assert_eq!(after_call(), 1);
}

#[test]
fn everything_reports_approved() {
    // Parameters that the full build rejects still report approved: the
    // stub must never produce a false negative.
    let ((), status) = check_approved(|| verify_hmac_indicator(DigestKind::Md5));
    assert_eq!(status, ApprovalStatus::Approved);

    let ((), status) = check_approved(|| ());
    assert_eq!(status, ApprovalStatus::Approved);
}

#[test]
fn lock_protocol_is_inert() {
    lock_state();
    assert_eq!(after_call(), 1);
    unlock_state();
    // Unmatched unlocks are harmless no-ops here.
    unlock_state();

    let _guard = StateLock::acquire();
    assert_eq!(before_call(), 0);
}
