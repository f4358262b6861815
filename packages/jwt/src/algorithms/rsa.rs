//! RSA PKCS#1 v1.5 algorithms (RS256, RS384, RS512)
//!
//! Asymmetric: the private key signs and the public key verifies, so signer
//! and verifier are separate values. A signer can still verify with its own
//! public half.

use super::non_empty;
use crate::{
    error::{JwtError, JwtResult},
    hash::HashAlgorithm,
    traits::{Signer, Verifier},
};
use ::rsa::{
    pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey},
    pkcs8::{DecodePrivateKey, DecodePublicKey},
    RsaPrivateKey, RsaPublicKey,
};
use std::fmt;

fn verify_with(
    key: &RsaPublicKey,
    hash: HashAlgorithm,
    signature: &[u8],
    signing_input: &[u8],
) -> JwtResult<()> {
    let hashed = hash.digest(signing_input);
    key.verify(hash.pkcs1v15(), &hashed, signature)
        .map_err(|_| JwtError::InvalidSignature)
}

fn rsa_hash(alg: &str) -> JwtResult<HashAlgorithm> {
    HashAlgorithm::for_alg("RS", alg).ok_or_else(|| JwtError::algorithm_not_available(alg))
}

/// RSA signer holding a private key.
#[derive(Clone)]
pub struct RsaSigner {
    hash: HashAlgorithm,
    key_id: Option<String>,
    key: RsaPrivateKey,
    public: RsaPublicKey,
}

impl RsaSigner {
    /// Build an RSA signer for the given hash.
    ///
    /// `key_id` is optional (can be empty) and helps the verifying side pick
    /// the right key when several are in use.
    #[must_use]
    pub fn new(hash: HashAlgorithm, key: RsaPrivateKey, key_id: impl Into<String>) -> Self {
        let public = key.to_public_key();
        Self {
            hash,
            key_id: non_empty(key_id),
            key,
            public,
        }
    }

    /// RSASSA-PKCS1-v1_5 using SHA-256.
    #[must_use]
    pub fn rs256(key: RsaPrivateKey, key_id: impl Into<String>) -> Self {
        Self::new(HashAlgorithm::Sha256, key, key_id)
    }

    /// RSASSA-PKCS1-v1_5 using SHA-384.
    #[must_use]
    pub fn rs384(key: RsaPrivateKey, key_id: impl Into<String>) -> Self {
        Self::new(HashAlgorithm::Sha384, key, key_id)
    }

    /// RSASSA-PKCS1-v1_5 using SHA-512.
    #[must_use]
    pub fn rs512(key: RsaPrivateKey, key_id: impl Into<String>) -> Self {
        Self::new(HashAlgorithm::Sha512, key, key_id)
    }

    /// Build from a JWS `alg` name such as `"RS512"`.
    ///
    /// # Errors
    /// Returns `JwtError::AlgorithmNotAvailable` for names outside the RSA family.
    pub fn from_algorithm(
        alg: &str,
        key: RsaPrivateKey,
        key_id: impl Into<String>,
    ) -> JwtResult<Self> {
        Ok(Self::new(rsa_hash(alg)?, key, key_id))
    }

    /// Load the private key from a PKCS#1 PEM (`BEGIN RSA PRIVATE KEY`).
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the PEM cannot be parsed.
    pub fn from_pkcs1_pem(
        hash: HashAlgorithm,
        pem: &str,
        key_id: impl Into<String>,
    ) -> JwtResult<Self> {
        let key = RsaPrivateKey::from_pkcs1_pem(pem)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))?;
        Ok(Self::new(hash, key, key_id))
    }

    /// Load the private key from a PKCS#8 PEM (`BEGIN PRIVATE KEY`).
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the PEM cannot be parsed.
    pub fn from_pkcs8_pem(
        hash: HashAlgorithm,
        pem: &str,
        key_id: impl Into<String>,
    ) -> JwtResult<Self> {
        let key = RsaPrivateKey::from_pkcs8_pem(pem)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))?;
        Ok(Self::new(hash, key, key_id))
    }

    /// Load the private key from PKCS#8 DER bytes.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the DER cannot be parsed.
    pub fn from_pkcs8_der(
        hash: HashAlgorithm,
        der: &[u8],
        key_id: impl Into<String>,
    ) -> JwtResult<Self> {
        let key = RsaPrivateKey::from_pkcs8_der(der)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA private key: {e}")))?;
        Ok(Self::new(hash, key, key_id))
    }

    /// Verifier for the public half of this key, carrying the same key id.
    #[must_use]
    pub fn verifier(&self) -> RsaVerifier {
        RsaVerifier {
            hash: self.hash,
            key_id: self.key_id.clone(),
            key: self.public.clone(),
        }
    }
}

impl fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaSigner")
            .field("alg", &self.hash.rsa_alg())
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

impl Verifier for RsaSigner {
    fn algorithm(&self) -> &str {
        self.hash.rsa_alg()
    }

    fn verify(&self, signature: &[u8], signing_input: &[u8]) -> JwtResult<()> {
        verify_with(&self.public, self.hash, signature, signing_input)
    }

    fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}

impl Signer for RsaSigner {
    fn sign(&self, signing_input: &[u8]) -> JwtResult<Vec<u8>> {
        let hashed = self.hash.digest(signing_input);
        self.key
            .sign(self.hash.pkcs1v15(), &hashed)
            .map_err(|e| JwtError::Signing(format!("RSA signing failed: {e}")))
    }
}

/// RSA verifier holding a public key.
#[derive(Debug, Clone)]
pub struct RsaVerifier {
    hash: HashAlgorithm,
    key_id: Option<String>,
    key: RsaPublicKey,
}

impl RsaVerifier {
    /// Build an RSA verifier for the given hash.
    #[must_use]
    pub fn new(hash: HashAlgorithm, key: RsaPublicKey) -> Self {
        Self {
            hash,
            key_id: None,
            key,
        }
    }

    /// RSASSA-PKCS1-v1_5 using SHA-256.
    #[must_use]
    pub fn rs256(key: RsaPublicKey) -> Self {
        Self::new(HashAlgorithm::Sha256, key)
    }

    /// RSASSA-PKCS1-v1_5 using SHA-384.
    #[must_use]
    pub fn rs384(key: RsaPublicKey) -> Self {
        Self::new(HashAlgorithm::Sha384, key)
    }

    /// RSASSA-PKCS1-v1_5 using SHA-512.
    #[must_use]
    pub fn rs512(key: RsaPublicKey) -> Self {
        Self::new(HashAlgorithm::Sha512, key)
    }

    /// Build from a JWS `alg` name such as `"RS384"`.
    ///
    /// # Errors
    /// Returns `JwtError::AlgorithmNotAvailable` for names outside the RSA family.
    pub fn from_algorithm(alg: &str, key: RsaPublicKey) -> JwtResult<Self> {
        Ok(Self::new(rsa_hash(alg)?, key))
    }

    /// Load the public key from an SPKI PEM (`BEGIN PUBLIC KEY`).
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the PEM cannot be parsed.
    pub fn from_public_key_pem(hash: HashAlgorithm, pem: &str) -> JwtResult<Self> {
        let key = RsaPublicKey::from_public_key_pem(pem)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))?;
        Ok(Self::new(hash, key))
    }

    /// Load the public key from SPKI DER bytes.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the DER cannot be parsed.
    pub fn from_public_key_der(hash: HashAlgorithm, der: &[u8]) -> JwtResult<Self> {
        let key = RsaPublicKey::from_public_key_der(der)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))?;
        Ok(Self::new(hash, key))
    }

    /// Load the public key from a PKCS#1 PEM (`BEGIN RSA PUBLIC KEY`).
    ///
    /// # Errors
    /// Returns `JwtError::InvalidKey` if the PEM cannot be parsed.
    pub fn from_pkcs1_pem(hash: HashAlgorithm, pem: &str) -> JwtResult<Self> {
        let key = RsaPublicKey::from_pkcs1_pem(pem)
            .map_err(|e| JwtError::InvalidKey(format!("Invalid RSA public key: {e}")))?;
        Ok(Self::new(hash, key))
    }

    /// Require tokens that name a key to name this one.
    #[must_use]
    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = non_empty(key_id);
        self
    }
}

impl Verifier for RsaVerifier {
    fn algorithm(&self) -> &str {
        self.hash.rsa_alg()
    }

    fn verify(&self, signature: &[u8], signing_input: &[u8]) -> JwtResult<()> {
        verify_with(&self.key, self.hash, signature, signing_input)
    }

    fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}
