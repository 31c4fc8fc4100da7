#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! FIPS 140-3 Service-Approval Indicator
//!
//! Per-thread, edge-triggered approval reporting for cryptographic
//! operations. After a primitive completes, its verification hook decides
//! whether the exact parameterization used (key size, digest, curve,
//! padding, tag length) satisfies the published approved-algorithm rules
//! and, if so, advances a thread-local counter. Callers detect approval by
//! snapshotting the counter around the call.
//!
//! This crate performs no cryptographic computation. It consumes only
//! already-resolved parameters handed over by the primitive
//! implementations that host it.
//!
//! ## Counter protocol
//!
//! Approval is edge-triggered: it occurred if and only if the counter
//! advanced across the call. Absolute values are meaningless, so earlier
//! approvals on the same thread are never misattributed.
//!
//! ```rust
//! use fips_indicator::{before_call, after_call, verify_hmac_indicator, DigestKind};
//!
//! let before = before_call();
//! // ... run the HMAC primitive, which invokes the hook on completion:
//! verify_hmac_indicator(DigestKind::Sha256);
//! let approved = after_call() > before;
//! assert!(approved);
//! ```
//!
//! Or let [`check_approved`] do the bracketing:
//!
//! ```rust
//! use fips_indicator::{check_approved, verify_hmac_indicator, ApprovalStatus, DigestKind};
//!
//! let ((), status) = check_approved(|| verify_hmac_indicator(DigestKind::Sha256));
//! assert_eq!(status, ApprovalStatus::Approved);
//! ```
//!
//! ## Composite operations
//!
//! A composite primitive (e.g. a signature scheme that drives a digest
//! primitive internally) brackets its internal sub-calls with
//! [`lock_state`]/[`unlock_state`] (or the RAII [`StateLock`]) so that the
//! inner calls cannot record their own approval. Only the outermost call
//! defines the recording window.
//!
//! ## Build modes
//!
//! With the default `fips` feature the full predicate-driven implementation
//! is compiled. Without it every public signature is retained but
//! [`before_call`] always returns 0 and [`after_call`] always returns 1,
//! so every operation trivially reports approved. A caller gating logic on
//! the indicator must never see a false negative merely because the
//! feature is absent. [`is_fips_build`] reports which mode is active.
//!
//! ## Failure policy
//!
//! The indicator never raises an error visible to a cryptographic caller.
//! Loss of the thread-local store degrades to "no recording possible";
//! failures while probing operation parameters collapse to not-approved;
//! mismatched lock/unlock nesting is a programming error and aborts the
//! process rather than risk emitting a corrupted compliance signal.

mod approved;
mod context;
mod diagnostics;
mod error;
mod state;
mod verify;

pub use context::{
    AeadAlgorithm, AeadContext, CipherAlgorithm, CipherContext, CipherMode, CmacContext,
    CurveKind, DigestKind, KeyPairInfo, PaddingMode, PssSaltLen, RsaSigningParams,
    SignatureContext, SignatureKey,
};
pub use diagnostics::{clear_error_queue, pending_errors, raise_error};
pub use error::{IndicatorError, Result};
pub use state::{
    after_call, before_call, check_approved, lock_state, unlock_state, ApprovalStatus, StateLock,
};
pub use verify::{
    verify_aead_ccm_indicator, verify_aead_gcm_indicator, verify_cipher_indicator,
    verify_cmac_indicator, verify_digest_sign_indicator, verify_digest_verify_indicator,
    verify_ec_keygen_indicator, verify_ecdh_indicator, verify_hmac_indicator,
    verify_pkey_keygen_indicator, verify_tls_kdf_indicator,
};

/// Whether the full predicate-driven indicator is compiled in.
///
/// Returns `false` for the always-approved stub build.
#[must_use]
pub fn is_fips_build() -> bool {
    cfg!(feature = "fips")
}

/// The crate version, for inclusion in compliance reports.
#[must_use]
pub fn version_string() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
