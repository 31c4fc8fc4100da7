//! The approval rules: stateless predicates over resolved parameters.
//!
//! Each predicate maps the parameters of one just-completed operation to
//! approved or not-approved. Predicates hold no state and perform no
//! cryptographic computation; an unrecognized parameterization is
//! not-approved rather than a fallthrough.

use crate::context::{
    AeadAlgorithm, AeadContext, CipherAlgorithm, CipherContext, CipherMode, CmacContext,
    CurveKind, DigestKind, PaddingMode, PssSaltLen, SignatureContext, SignatureKey,
};
use crate::diagnostics;
use crate::error::Result;

/// AES-GCM is approved with 128- or 256-bit keys and an internal IV
/// (SP 800-38D section 8.2.2).
pub(crate) fn aead_gcm_approved(ctx: &AeadContext) -> bool {
    ctx.algorithm() == AeadAlgorithm::AesGcm && matches!(ctx.key_len(), 16 | 32)
}

/// AES-CCM is approved only with 128-bit keys and 32-bit tags.
pub(crate) fn aead_ccm_approved(ctx: &AeadContext) -> bool {
    ctx.algorithm() == AeadAlgorithm::AesCcm && ctx.key_len() == 16 && ctx.tag_len() == 4
}

/// AES-CMAC is approved with 128- or 256-bit keys.
pub(crate) fn cmac_approved(ctx: &CmacContext) -> bool {
    matches!(ctx.key_len(), 16 | 32)
}

pub(crate) fn curve_approved(curve: CurveKind) -> bool {
    matches!(
        curve,
        CurveKind::Secp224r1 | CurveKind::Secp256r1 | CurveKind::Secp384r1 | CurveKind::Secp521r1
    )
}

pub(crate) fn digest_approved_for_signing(digest: DigestKind) -> bool {
    matches!(
        digest,
        DigestKind::Sha224 | DigestKind::Sha256 | DigestKind::Sha384 | DigestKind::Sha512
    )
}

/// SHA-1 remains approved on the verification path for legacy signatures.
pub(crate) fn digest_approved_for_verifying(digest: DigestKind) -> bool {
    matches!(
        digest,
        DigestKind::Sha1
            | DigestKind::Sha224
            | DigestKind::Sha256
            | DigestKind::Sha384
            | DigestKind::Sha512
    )
}

pub(crate) fn hmac_digest_approved(digest: DigestKind) -> bool {
    matches!(
        digest,
        DigestKind::Sha1
            | DigestKind::Sha224
            | DigestKind::Sha256
            | DigestKind::Sha384
            | DigestKind::Sha512
    )
}

/// HMAC-MD5, HMAC-SHA1 and their concurrent combination are approved for
/// the TLS 1.0/1.1 KDF; HMAC-SHA{256,384,512} for the TLS 1.2 KDF. These
/// digests are approved only in the context of the TLS protocol.
pub(crate) fn tls_kdf_digest_approved(digest: DigestKind) -> bool {
    matches!(
        digest,
        DigestKind::Md5
            | DigestKind::Sha1
            | DigestKind::Md5Sha1
            | DigestKind::Sha256
            | DigestKind::Sha384
            | DigestKind::Sha512
    )
}

/// AES in ECB, CBC or CTR mode is approved at any AES key size.
pub(crate) fn cipher_approved(ctx: &CipherContext) -> bool {
    ctx.algorithm() == CipherAlgorithm::Aes
        && matches!(ctx.mode(), CipherMode::Ecb | CipherMode::Cbc | CipherMode::Ctr)
}

/// 2048-, 3072- and 4096-bit moduli are approved for RSA key generation.
pub(crate) fn rsa_keygen_modulus_approved(modulus_len: usize) -> bool {
    matches!(modulus_len, 256 | 384 | 512)
}

/// The composite digest-sign / digest-verify rule.
///
/// `rsa_1024_ok` admits 1024-bit RSA moduli, which is the case only on the
/// verification path. `digest_ok` is the per-direction digest rule. Probe
/// failures collapse to not-approved and any diagnostics raised while
/// probing are cleared before returning, so nothing leaks to the caller.
pub(crate) fn signature_operation_approved(
    ctx: &SignatureContext,
    rsa_1024_ok: bool,
    digest_ok: fn(DigestKind) -> bool,
) -> bool {
    let approved = signature_probe(ctx, rsa_1024_ok, digest_ok).unwrap_or(false);
    diagnostics::clear_error_queue();
    approved
}

fn signature_probe(
    ctx: &SignatureContext,
    rsa_1024_ok: bool,
    digest_ok: fn(DigestKind) -> bool,
) -> Result<bool> {
    // Signature schemes without a prehash are currently never approved.
    let Some(digest) = ctx.message_digest() else {
        return Ok(false);
    };

    match *ctx.key() {
        SignatureKey::Rsa(params) => {
            // The digest negotiated on the key context must match the one
            // the operation actually used.
            let bound_digest = params.probe_bound_digest()?;
            if bound_digest != digest {
                return Ok(false);
            }

            let padding = params.probe_padding()?;
            if padding == PaddingMode::Pss {
                // Only PSS where saltLen equals hashLen is tested with
                // ACVP. Non-standard mask generation is also excluded.
                let salt_ok = match params.probe_pss_salt_len()? {
                    PssSaltLen::DigestLen => true,
                    PssSaltLen::Explicit(len) => len == bound_digest.output_len(),
                };
                if !salt_ok || params.probe_mgf1_digest()? != digest {
                    return Ok(false);
                }
            }

            // 2048-, 3072- and 4096-bit moduli are approved; 1024-bit
            // only where the caller said so.
            let modulus_ok = (rsa_1024_ok && params.modulus_len() == 128)
                || matches!(params.modulus_len(), 256 | 384 | 512);

            Ok(digest_ok(digest) && modulus_ok)
        }
        SignatureKey::Ec { curve } => Ok(digest_ok(digest) && curve_approved(curve)),
    }
}
