//! Call-site verification glue.
//!
//! One hook per operation category. The hosting primitive implementation
//! invokes its hook exactly once, immediately after the primitive
//! completes successfully, handing over the finalized operation context.
//! The hook applies the matching approval rule and advances the indicator
//! on approval; it returns nothing and never fails. A parameterization the
//! rule does not recognize silently reports not-approved.

use crate::approved;
use crate::context::{
    AeadContext, CipherContext, CmacContext, CurveKind, DigestKind, KeyPairInfo, SignatureContext,
};
use crate::state::update_state;

/// Hook for a completed AES-GCM seal or open operation.
pub fn verify_aead_gcm_indicator(ctx: &AeadContext) {
    if approved::aead_gcm_approved(ctx) {
        update_state();
    }
}

/// Hook for a completed AES-CCM seal or open operation.
pub fn verify_aead_ccm_indicator(ctx: &AeadContext) {
    if approved::aead_ccm_approved(ctx) {
        update_state();
    }
}

/// Hook for a completed block-cipher CMAC operation.
pub fn verify_cmac_indicator(ctx: &CmacContext) {
    if approved::cmac_approved(ctx) {
        update_state();
    }
}

/// Hook for a completed symmetric cipher operation.
pub fn verify_cipher_indicator(ctx: &CipherContext) {
    if approved::cipher_approved(ctx) {
        update_state();
    }
}

/// Hook for a completed HMAC operation.
pub fn verify_hmac_indicator(digest: DigestKind) {
    if approved::hmac_digest_approved(digest) {
        update_state();
    }
}

/// Hook for a completed TLS key-derivation operation.
pub fn verify_tls_kdf_indicator(digest: DigestKind) {
    if approved::tls_kdf_digest_approved(digest) {
        update_state();
    }
}

/// Hook for a completed EC key generation.
pub fn verify_ec_keygen_indicator(curve: CurveKind) {
    if approved::curve_approved(curve) {
        update_state();
    }
}

/// Hook for a completed ECDH key agreement.
pub fn verify_ecdh_indicator(curve: CurveKind) {
    if approved::curve_approved(curve) {
        update_state();
    }
}

/// Hook for a completed asymmetric key-pair generation.
pub fn verify_pkey_keygen_indicator(key: &KeyPairInfo) {
    let ok = match *key {
        KeyPairInfo::Rsa { modulus_len } => approved::rsa_keygen_modulus_approved(modulus_len),
        KeyPairInfo::Ec { curve } => approved::curve_approved(curve),
    };
    if ok {
        update_state();
    }
}

/// Hook for a completed digest-sign operation.
pub fn verify_digest_sign_indicator(ctx: &SignatureContext) {
    if approved::signature_operation_approved(ctx, false, approved::digest_approved_for_signing) {
        update_state();
    }
}

/// Hook for a completed digest-verify operation.
pub fn verify_digest_verify_indicator(ctx: &SignatureContext) {
    if approved::signature_operation_approved(ctx, true, approved::digest_approved_for_verifying) {
        update_state();
    }
}
