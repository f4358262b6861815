//! JWT error taxonomy

use std::fmt;
use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// Token segment a decode failure refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// First segment, the JOSE header.
    Header,
    /// Second segment, the claims payload.
    Claims,
    /// Third segment, the signature.
    Signature,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Claims => f.write_str("claims"),
            Segment::Signature => f.write_str("signature"),
        }
    }
}

/// JWT error types
///
/// Every failure is terminal. Callers that need to branch should match on
/// [`JwtError::kind`] rather than on message text.
#[derive(Debug, Error)]
pub enum JwtError {
    /// The requested algorithm has no implementation in this build.
    #[error("algorithm not available: {0}")]
    AlgorithmNotAvailable(String),

    /// Recomputed signature does not match the provided one.
    #[error("invalid signature")]
    InvalidSignature,

    /// Token does not consist of exactly three dot separated segments.
    #[error("malformed token")]
    MalformedToken,

    /// Header algorithm or key id does not match the verifier.
    #[error("invalid signer")]
    InvalidSigner,

    /// Current time is past `exp`.
    #[error("expired")]
    Expired,

    /// Current time is before `nbf`.
    #[error("token not yet active")]
    NotReady,

    /// A segment is not valid unpadded base64url.
    #[error("cannot base64 decode {segment}: {source}")]
    Base64 {
        /// Segment that failed to decode.
        segment: Segment,
        /// Underlying decoder error.
        #[source]
        source: base64::DecodeError,
    },

    /// A decoded segment is not the expected JSON.
    #[error("cannot JSON decode {segment}: {source}")]
    Json {
        /// Segment that failed to parse.
        segment: Segment,
        /// Underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The header could not be serialized.
    #[error("cannot encode header: {0}")]
    EncodeHeader(#[source] serde_json::Error),

    /// The caller's claims could not be serialized.
    #[error("cannot encode claims: {0}")]
    EncodeClaims(#[source] serde_json::Error),

    /// The signer refused to produce a signature.
    #[error("cannot sign: {0}")]
    Sign(#[source] Box<JwtError>),

    /// Low level signing primitive failure.
    #[error("signing failed: {0}")]
    Signing(String),

    /// Key material could not be loaded or used.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Closed classification of [`JwtError`] for equality matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`JwtError::AlgorithmNotAvailable`].
    AlgorithmNotAvailable,
    /// See [`JwtError::InvalidSignature`].
    InvalidSignature,
    /// See [`JwtError::MalformedToken`].
    MalformedToken,
    /// See [`JwtError::InvalidSigner`].
    InvalidSigner,
    /// See [`JwtError::Expired`].
    Expired,
    /// See [`JwtError::NotReady`].
    NotReady,
    /// Base64 or JSON decoding of a segment failed.
    Decode,
    /// Header or claims serialization failed.
    Encode,
    /// Signature creation failed.
    Signing,
    /// Key material was rejected.
    Key,
}

impl JwtError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            JwtError::AlgorithmNotAvailable(_) => ErrorKind::AlgorithmNotAvailable,
            JwtError::InvalidSignature => ErrorKind::InvalidSignature,
            JwtError::MalformedToken => ErrorKind::MalformedToken,
            JwtError::InvalidSigner => ErrorKind::InvalidSigner,
            JwtError::Expired => ErrorKind::Expired,
            JwtError::NotReady => ErrorKind::NotReady,
            JwtError::Base64 { .. } | JwtError::Json { .. } => ErrorKind::Decode,
            JwtError::EncodeHeader(_) | JwtError::EncodeClaims(_) => ErrorKind::Encode,
            JwtError::Sign(_) | JwtError::Signing(_) => ErrorKind::Signing,
            JwtError::InvalidKey(_) => ErrorKind::Key,
        }
    }

    /// Create an algorithm not available error
    #[inline]
    #[must_use]
    pub fn algorithm_not_available(alg: &str) -> Self {
        JwtError::AlgorithmNotAvailable(alg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    /// Create a signing error
    #[inline]
    #[must_use]
    pub fn signing(msg: &str) -> Self {
        JwtError::Signing(msg.to_string())
    }

    pub(crate) fn base64(segment: Segment, source: base64::DecodeError) -> Self {
        JwtError::Base64 { segment, source }
    }

    pub(crate) fn json(segment: Segment, source: serde_json::Error) -> Self {
        JwtError::Json { segment, source }
    }
}
