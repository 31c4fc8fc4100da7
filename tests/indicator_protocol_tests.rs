//! Counter-protocol and reentrancy-guard tests.
//!
//! Everything here drives the indicator through its public surface only:
//! snapshots, lock/unlock, and the per-category verification hooks. All
//! assertions are relative to a starting snapshot, never to an absolute
//! counter value, matching the edge-triggered contract.

#![cfg(feature = "fips")]

use fips_indicator::{
    after_call, before_call, check_approved, lock_state, unlock_state, verify_hmac_indicator,
    ApprovalStatus, DigestKind, StateLock,
};
use proptest::prelude::*;

#[test]
fn before_call_is_idempotent() {
    assert_eq!(before_call(), before_call());
}

#[test]
fn after_call_never_precedes_before_call() {
    let before = before_call();
    verify_hmac_indicator(DigestKind::Sha256);
    verify_hmac_indicator(DigestKind::Md5);
    assert!(after_call() >= before);
}

#[test]
fn approved_operation_advances_counter_by_one() {
    let before = before_call();
    verify_hmac_indicator(DigestKind::Sha256);
    assert_eq!(after_call(), before + 1);
}

#[test]
fn unapproved_operation_leaves_counter_unchanged() {
    let before = before_call();
    verify_hmac_indicator(DigestKind::Md5);
    assert_eq!(after_call(), before);
}

#[test]
fn detection_is_independent_of_starting_value() {
    // Pile up unrelated approvals first; the bracketed call must still be
    // attributed correctly.
    for _ in 0..5 {
        verify_hmac_indicator(DigestKind::Sha384);
    }
    let before = before_call();
    verify_hmac_indicator(DigestKind::Sha256);
    assert_eq!(after_call(), before + 1);

    let before = before_call();
    verify_hmac_indicator(DigestKind::Md5);
    assert_eq!(after_call(), before);
}

#[test]
fn check_approved_reports_both_outcomes() {
    let ((), status) = check_approved(|| verify_hmac_indicator(DigestKind::Sha512));
    assert_eq!(status, ApprovalStatus::Approved);

    let ((), status) = check_approved(|| verify_hmac_indicator(DigestKind::Sha512_256));
    assert_eq!(status, ApprovalStatus::NotApproved);
}

#[test]
fn check_approved_passes_the_operation_result_through() {
    let (value, status) = check_approved(|| {
        verify_hmac_indicator(DigestKind::Sha256);
        42
    });
    assert_eq!(value, 42);
    assert_eq!(status, ApprovalStatus::Approved);
}

#[test]
fn locked_indicator_suppresses_updates() {
    let before = before_call();
    lock_state();
    verify_hmac_indicator(DigestKind::Sha256);
    verify_hmac_indicator(DigestKind::Sha256);
    unlock_state();
    assert_eq!(after_call(), before);
}

#[test]
fn inner_call_window_shows_no_change_while_outer_is_locked() {
    // A composite primitive locks around its internal digest sub-call.
    // The sub-call's own before/after window must show nothing, while the
    // outer operation may still record once after unlocking.
    let outer_before = before_call();
    lock_state();

    let inner_before = before_call();
    verify_hmac_indicator(DigestKind::Sha256);
    assert_eq!(after_call(), inner_before);

    unlock_state();
    verify_hmac_indicator(DigestKind::Sha256);
    assert_eq!(after_call(), outer_before + 1);
}

#[test]
fn nested_locks_unwind_before_counting_resumes() {
    let before = before_call();
    lock_state();
    lock_state();
    verify_hmac_indicator(DigestKind::Sha256);
    unlock_state();
    verify_hmac_indicator(DigestKind::Sha256);
    unlock_state();
    assert_eq!(after_call(), before);

    verify_hmac_indicator(DigestKind::Sha256);
    assert_eq!(after_call(), before + 1);
}

#[test]
fn state_lock_guard_restores_depth_on_drop() {
    let before = before_call();
    {
        let _guard = StateLock::acquire();
        verify_hmac_indicator(DigestKind::Sha256);
        assert_eq!(after_call(), before);
    }
    verify_hmac_indicator(DigestKind::Sha256);
    assert_eq!(after_call(), before + 1);
}

#[test]
fn state_lock_guards_nest() {
    let before = before_call();
    {
        let _outer = StateLock::acquire();
        {
            let _inner = StateLock::acquire();
            verify_hmac_indicator(DigestKind::Sha256);
        }
        verify_hmac_indicator(DigestKind::Sha256);
    }
    assert_eq!(after_call(), before);
}

#[test]
fn approvals_are_invisible_across_threads() {
    verify_hmac_indicator(DigestKind::Sha256);
    let remote = std::thread::spawn(|| {
        let before = before_call();
        assert_eq!(before, 0);
        verify_hmac_indicator(DigestKind::Sha256);
        after_call()
    })
    .join()
    .expect("thread join");
    assert_eq!(remote, 1);
}

proptest! {
    /// For any operation sequence, properly unwound nesting leaves the
    /// counter advanced by exactly the number of approved completions
    /// that happened at depth zero.
    #[test]
    fn nesting_model_matches_counter(ops in prop::collection::vec(0u8..3, 0..64)) {
        let start = before_call();
        let mut depth: u64 = 0;
        let mut expected: u64 = 0;

        for op in ops {
            match op {
                0 => {
                    lock_state();
                    depth += 1;
                }
                1 => {
                    if depth > 0 {
                        unlock_state();
                        depth -= 1;
                    }
                }
                _ => {
                    verify_hmac_indicator(DigestKind::Sha256);
                    if depth == 0 {
                        expected += 1;
                    }
                }
            }
        }
        for _ in 0..depth {
            unlock_state();
        }

        prop_assert_eq!(after_call() - start, expected);
    }

    /// Monotonicity holds across arbitrary interleavings of approved and
    /// unapproved completions.
    #[test]
    fn counter_is_monotone(digests in prop::collection::vec(any::<bool>(), 0..32)) {
        let mut last = before_call();
        for approved in digests {
            let digest = if approved { DigestKind::Sha256 } else { DigestKind::Md5 };
            verify_hmac_indicator(digest);
            let now = after_call();
            prop_assert!(now >= last);
            last = now;
        }
    }
}
