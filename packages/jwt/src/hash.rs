//! SHA-2 selection shared by the HMAC and RSA families

use rsa::Pkcs1v15Sign;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// Hash function bound to an algorithm at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    /// SHA-256, used by HS256 and RS256.
    Sha256,
    /// SHA-384, used by HS384 and RS384.
    Sha384,
    /// SHA-512, used by HS512 and RS512.
    Sha512,
}

impl HashAlgorithm {
    /// Resolve the hash from a JWS `alg` name with the given family prefix,
    /// e.g. `("HS", "HS384")` gives `Sha384`.
    pub(crate) fn for_alg(prefix: &str, alg: &str) -> Option<Self> {
        match alg.strip_prefix(prefix)? {
            "256" => Some(HashAlgorithm::Sha256),
            "384" => Some(HashAlgorithm::Sha384),
            "512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    /// HMAC `alg` name for this hash.
    #[must_use]
    pub const fn hmac_alg(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "HS256",
            HashAlgorithm::Sha384 => "HS384",
            HashAlgorithm::Sha512 => "HS512",
        }
    }

    /// RSA PKCS#1 v1.5 `alg` name for this hash.
    #[must_use]
    pub const fn rsa_alg(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "RS256",
            HashAlgorithm::Sha384 => "RS384",
            HashAlgorithm::Sha512 => "RS512",
        }
    }

    /// Digest length in bytes.
    #[must_use]
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    pub(crate) fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// PKCS#1 v1.5 padding scheme carrying this hash's DigestInfo prefix.
    pub(crate) fn pkcs1v15(self) -> Pkcs1v15Sign {
        match self {
            HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
            HashAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
            HashAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
        }
    }
}

/// Recommended minimum key size in bytes for an algorithm name.
///
/// # Errors
/// Returns `JwtError::AlgorithmNotAvailable` if the algorithm is not supported
pub fn recommended_key_size(alg: &str) -> crate::JwtResult<usize> {
    match alg {
        "HS256" => Ok(32),
        "HS384" => Ok(48),
        "HS512" => Ok(64),
        // 2048-bit modulus
        "RS256" | "RS384" | "RS512" => Ok(256),
        _ => Err(crate::JwtError::algorithm_not_available(alg)),
    }
}
