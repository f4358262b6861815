//! HMAC-SHA algorithms (HS256, HS384, HS512)
//!
//! Symmetric: one shared secret both signs and verifies, so a single value
//! plays both roles.

use super::non_empty;
use crate::{
    error::{JwtError, JwtResult},
    hash::HashAlgorithm,
    traits::{Signer, Verifier},
};
use ::hmac::{digest::KeyInit, Mac};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;
use zeroize::Zeroizing;

type HmacSha256 = ::hmac::Hmac<Sha256>;
type HmacSha384 = ::hmac::Hmac<Sha384>;
type HmacSha512 = ::hmac::Hmac<Sha512>;

/// HMAC signer and verifier over a shared secret.
///
/// The secret is copied at construction and wiped on drop.
#[derive(Clone)]
pub struct Hmac {
    hash: HashAlgorithm,
    key_id: Option<String>,
    key: Zeroizing<Vec<u8>>,
}

impl Hmac {
    /// Build an HMAC algorithm for the given hash.
    ///
    /// An empty `key_id` means the header carries no `kid`.
    #[must_use]
    pub fn new(hash: HashAlgorithm, key: &[u8], key_id: impl Into<String>) -> Self {
        Self {
            hash,
            key_id: non_empty(key_id),
            key: Zeroizing::new(key.to_vec()),
        }
    }

    /// HMAC using SHA-256.
    #[must_use]
    pub fn hs256(key: &[u8], key_id: impl Into<String>) -> Self {
        Self::new(HashAlgorithm::Sha256, key, key_id)
    }

    /// HMAC using SHA-384.
    #[must_use]
    pub fn hs384(key: &[u8], key_id: impl Into<String>) -> Self {
        Self::new(HashAlgorithm::Sha384, key, key_id)
    }

    /// HMAC using SHA-512.
    #[must_use]
    pub fn hs512(key: &[u8], key_id: impl Into<String>) -> Self {
        Self::new(HashAlgorithm::Sha512, key, key_id)
    }

    /// Build from a JWS `alg` name such as `"HS384"`.
    ///
    /// # Errors
    /// Returns `JwtError::AlgorithmNotAvailable` for names outside the HMAC family.
    pub fn from_algorithm(alg: &str, key: &[u8], key_id: impl Into<String>) -> JwtResult<Self> {
        let hash = HashAlgorithm::for_alg("HS", alg)
            .ok_or_else(|| JwtError::algorithm_not_available(alg))?;
        Ok(Self::new(hash, key, key_id))
    }

    /// Hash function this key is bound to.
    #[must_use]
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }
}

impl fmt::Debug for Hmac {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac")
            .field("alg", &self.hash.hmac_alg())
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

fn keyed<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> JwtResult<M> {
    let mut mac = <M as KeyInit>::new_from_slice(key)
        .map_err(|_| JwtError::invalid_key("Invalid HMAC key"))?;
    mac.update(data);
    Ok(mac)
}

fn tag<M: Mac + KeyInit>(key: &[u8], data: &[u8]) -> JwtResult<Vec<u8>> {
    Ok(keyed::<M>(key, data)?.finalize().into_bytes().to_vec())
}

fn check<M: Mac + KeyInit>(key: &[u8], data: &[u8], signature: &[u8]) -> JwtResult<()> {
    // constant-time comparison
    keyed::<M>(key, data)?
        .verify_slice(signature)
        .map_err(|_| JwtError::InvalidSignature)
}

impl Verifier for Hmac {
    fn algorithm(&self) -> &str {
        self.hash.hmac_alg()
    }

    fn verify(&self, signature: &[u8], signing_input: &[u8]) -> JwtResult<()> {
        match self.hash {
            HashAlgorithm::Sha256 => check::<HmacSha256>(&self.key, signing_input, signature),
            HashAlgorithm::Sha384 => check::<HmacSha384>(&self.key, signing_input, signature),
            HashAlgorithm::Sha512 => check::<HmacSha512>(&self.key, signing_input, signature),
        }
    }

    fn key_id(&self) -> Option<&str> {
        self.key_id.as_deref()
    }
}

impl Signer for Hmac {
    fn sign(&self, signing_input: &[u8]) -> JwtResult<Vec<u8>> {
        match self.hash {
            HashAlgorithm::Sha256 => tag::<HmacSha256>(&self.key, signing_input),
            HashAlgorithm::Sha384 => tag::<HmacSha384>(&self.key, signing_input),
            HashAlgorithm::Sha512 => tag::<HmacSha512>(&self.key, signing_input),
        }
    }
}
