//! JWT type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// JOSE header of a compact token.
///
/// Field order is the wire order: `typ`, `alg`, then `kid` when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Token type, always `JWT` for tokens produced here.
    #[serde(default)]
    pub typ: String,
    /// Signing algorithm.
    #[serde(default)]
    pub alg: String,
    /// Key ID hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kid: Option<String>,
}

/// Borrowed header written by the encoder.
#[derive(Serialize)]
pub(crate) struct HeaderRef<'a> {
    pub typ: &'static str,
    pub alg: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kid: Option<&'a str>,
}

/// Header fields the decoder checks against the verifier.
#[derive(Deserialize)]
pub(crate) struct HeaderView {
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(default)]
    pub kid: Option<String>,
}

/// RFC 7519 temporal claims, read alongside the caller's claims.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Lifetime {
    #[serde(default)]
    exp: Option<i64>,
    #[serde(default)]
    nbf: Option<i64>,
}

impl Lifetime {
    /// Expiration time; absent, null and zero all mean unset.
    pub fn expires_at(&self) -> Option<i64> {
        self.exp.filter(|exp| *exp != 0)
    }

    /// Not-before time; absent, null and zero all mean unset.
    pub fn not_before(&self) -> Option<i64> {
        self.nbf.filter(|nbf| *nbf != 0)
    }
}

/// Serialized compact token `header.payload.signature`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    /// Token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the token text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<[u8]> for Token {
    fn as_ref(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
