//! Operation contexts and closed parameter-domain enumerations.
//!
//! Primitive implementations resolve their parameters into these types
//! before invoking the matching verification hook. Each parameter domain
//! (digest, curve, padding, cipher mode) is a closed enum so that adding a
//! variant forces every predicate that matches on it to be revisited,
//! rather than silently falling through an open-ended integer code.

use serde::{Deserialize, Serialize};

use crate::diagnostics;
use crate::error::{IndicatorError, Result};

/// Message digest algorithms visible to the approval rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DigestKind {
    /// MD5 (TLS 1.0/1.1 KDF only).
    Md5,
    /// SHA-1.
    Sha1,
    /// Concatenated MD5+SHA-1 as used by the TLS 1.0/1.1 PRF.
    Md5Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// SHA-512/256. Not yet validated for signing, verifying, or HMAC.
    Sha512_256,
}

impl DigestKind {
    /// Digest output length in bytes.
    #[must_use]
    pub fn output_len(self) -> usize {
        match self {
            DigestKind::Md5 => 16,
            DigestKind::Sha1 => 20,
            DigestKind::Md5Sha1 => 36,
            DigestKind::Sha224 => 28,
            DigestKind::Sha256 | DigestKind::Sha512_256 => 32,
            DigestKind::Sha384 => 48,
            DigestKind::Sha512 => 64,
        }
    }
}

/// Named elliptic curves visible to the approval rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    /// NIST P-224.
    Secp224r1,
    /// NIST P-256 (a.k.a. prime256v1).
    Secp256r1,
    /// NIST P-384.
    Secp384r1,
    /// NIST P-521.
    Secp521r1,
    /// secp256k1. Never approved.
    Secp256k1,
}

/// RSA padding modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaddingMode {
    /// PKCS#1 v1.5 signature padding.
    Pkcs1,
    /// Probabilistic signature scheme (PSS) padding.
    Pss,
    /// Raw, unpadded RSA. Never approved.
    NoPadding,
}

/// PSS salt length as configured on the signing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PssSaltLen {
    /// Salt length left unspecified, defaulting to the digest length.
    DigestLen,
    /// Explicit salt length in bytes.
    Explicit(usize),
}

/// AEAD algorithm families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AeadAlgorithm {
    /// AES-GCM with an internally generated IV.
    AesGcm,
    /// AES-CCM.
    AesCcm,
    /// ChaCha20-Poly1305. Never approved.
    Chacha20Poly1305,
}

/// Block cipher algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherAlgorithm {
    /// AES.
    Aes,
    /// Triple-DES. Never approved.
    TripleDes,
}

/// Block cipher modes of operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherMode {
    /// Electronic codebook.
    Ecb,
    /// Cipher block chaining.
    Cbc,
    /// Counter mode.
    Ctr,
    /// Output feedback. Never approved.
    Ofb,
    /// Cipher feedback. Never approved.
    Cfb,
}

/// Resolved parameters of a completed AEAD seal or open operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadContext {
    algorithm: AeadAlgorithm,
    key_len: usize,
    tag_len: usize,
}

impl AeadContext {
    /// Capture the parameters of a finished AEAD operation.
    ///
    /// `key_len` and `tag_len` are in bytes.
    #[must_use]
    pub fn new(algorithm: AeadAlgorithm, key_len: usize, tag_len: usize) -> Self {
        Self { algorithm, key_len, tag_len }
    }

    /// The AEAD algorithm family.
    #[must_use]
    pub fn algorithm(&self) -> AeadAlgorithm {
        self.algorithm
    }

    /// Key length in bytes.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.key_len
    }

    /// Authentication tag length in bytes.
    #[must_use]
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }
}

/// Resolved parameters of a completed block-cipher CMAC operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CmacContext {
    key_len: usize,
}

impl CmacContext {
    /// Capture the parameters of a finished CMAC operation.
    #[must_use]
    pub fn new(key_len: usize) -> Self {
        Self { key_len }
    }

    /// Key length in bytes.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.key_len
    }
}

/// Resolved parameters of a completed symmetric cipher operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherContext {
    algorithm: CipherAlgorithm,
    mode: CipherMode,
    key_len: usize,
}

impl CipherContext {
    /// Capture the parameters of a finished cipher operation.
    #[must_use]
    pub fn new(algorithm: CipherAlgorithm, mode: CipherMode, key_len: usize) -> Self {
        Self { algorithm, mode, key_len }
    }

    /// The cipher algorithm.
    #[must_use]
    pub fn algorithm(&self) -> CipherAlgorithm {
        self.algorithm
    }

    /// The mode of operation.
    #[must_use]
    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    /// Key length in bytes.
    #[must_use]
    pub fn key_len(&self) -> usize {
        self.key_len
    }
}

/// A freshly generated key pair, as seen by the key-generation hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPairInfo {
    /// RSA key pair with the resulting modulus size in bytes.
    Rsa {
        /// Modulus size in bytes (e.g. 256 for RSA-2048).
        modulus_len: usize,
    },
    /// EC key pair on the named curve.
    Ec {
        /// The curve the key pair was generated on.
        curve: CurveKind,
    },
}

/// The key bound to a signing or verifying context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKey {
    /// RSA or RSA-PSS key with its resolved signing parameters.
    Rsa(RsaSigningParams),
    /// EC key on the named curve.
    Ec {
        /// The curve of the signing key.
        curve: CurveKind,
    },
}

/// Resolved RSA signing parameters.
///
/// Fields that a real key context can fail to report are optional; the
/// corresponding probe accessor raises a diagnostic and fails, which the
/// approval rules collapse into not-approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaSigningParams {
    modulus_len: usize,
    bound_digest: Option<DigestKind>,
    padding: Option<PaddingMode>,
    pss_salt_len: Option<PssSaltLen>,
    mgf1_digest: Option<DigestKind>,
}

impl RsaSigningParams {
    /// Start from the modulus size in bytes; everything else unreported.
    #[must_use]
    pub fn new(modulus_len: usize) -> Self {
        Self {
            modulus_len,
            bound_digest: None,
            padding: None,
            pss_salt_len: None,
            mgf1_digest: None,
        }
    }

    /// Record the digest negotiated on the key context.
    #[must_use]
    pub fn bound_digest(mut self, digest: DigestKind) -> Self {
        self.bound_digest = Some(digest);
        self
    }

    /// Record the padding mode.
    #[must_use]
    pub fn padding(mut self, padding: PaddingMode) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Record the PSS salt length.
    #[must_use]
    pub fn pss_salt_len(mut self, salt_len: PssSaltLen) -> Self {
        self.pss_salt_len = Some(salt_len);
        self
    }

    /// Record the MGF1 digest.
    #[must_use]
    pub fn mgf1_digest(mut self, digest: DigestKind) -> Self {
        self.mgf1_digest = Some(digest);
        self
    }

    /// Modulus size in bytes.
    #[must_use]
    pub fn modulus_len(&self) -> usize {
        self.modulus_len
    }

    pub(crate) fn probe_bound_digest(&self) -> Result<DigestKind> {
        self.bound_digest.ok_or_else(|| probe_failure("signature digest"))
    }

    pub(crate) fn probe_padding(&self) -> Result<PaddingMode> {
        self.padding.ok_or_else(|| probe_failure("rsa padding"))
    }

    pub(crate) fn probe_pss_salt_len(&self) -> Result<PssSaltLen> {
        // An unset salt length is not a probe failure: contexts that never
        // configured one report the digest-length default.
        Ok(self.pss_salt_len.unwrap_or(PssSaltLen::DigestLen))
    }

    pub(crate) fn probe_mgf1_digest(&self) -> Result<DigestKind> {
        self.mgf1_digest.ok_or_else(|| probe_failure("rsa mgf1 digest"))
    }
}

fn probe_failure(what: &'static str) -> IndicatorError {
    diagnostics::raise_error(what);
    IndicatorError::ParameterProbe(what)
}

/// Resolved parameters of a completed digest-sign or digest-verify
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureContext {
    digest: Option<DigestKind>,
    key: SignatureKey,
}

impl SignatureContext {
    /// Capture a signing context over an RSA or RSA-PSS key.
    #[must_use]
    pub fn rsa(digest: Option<DigestKind>, params: RsaSigningParams) -> Self {
        Self { digest, key: SignatureKey::Rsa(params) }
    }

    /// Capture a signing context over an EC key.
    #[must_use]
    pub fn ec(digest: Option<DigestKind>, curve: CurveKind) -> Self {
        Self { digest, key: SignatureKey::Ec { curve } }
    }

    /// The digest the operation actually used, if any. Schemes without a
    /// pre-hash report `None`.
    #[must_use]
    pub fn message_digest(&self) -> Option<DigestKind> {
        self.digest
    }

    /// The key bound to the context.
    #[must_use]
    pub fn key(&self) -> &SignatureKey {
        &self.key
    }
}
