//! Token encoding and validating decoding.
//!
//! Decoding runs a fixed sequence and stops at the first failure:
//! split, header, claims, algorithm match, key id match, signature decode,
//! signature verify, temporal check. Claims are handed back only after every
//! step passed, so nothing parsed from an unverified payload reaches the caller.

use crate::{
    base64url,
    error::{JwtError, JwtResult, Segment},
    traits::{Signer, Verifier},
    types::{HeaderRef, HeaderView, Lifetime, Token},
    validation::Validation,
};
use serde::{de::DeserializeOwned, Serialize};

/// Serialize `claims` as a signed compact token.
///
/// The header carries `typ: "JWT"`, the signer's `alg` and, when the signer
/// has a key id, `kid`. The signature covers `base64url(header) "." base64url(claims)`.
///
/// # Errors
/// Returns `EncodeHeader`/`EncodeClaims` when serialization fails and `Sign`
/// wrapping the signer's error when signing fails.
pub fn encode<S, C>(signer: &S, claims: &C) -> JwtResult<Token>
where
    S: Signer + ?Sized,
    C: Serialize + ?Sized,
{
    let alg = signer.algorithm();
    let kid = signer.key_id().filter(|kid| !kid.is_empty());

    let header = encode_json(&HeaderRef {
        typ: "JWT",
        alg,
        kid,
    })
    .map_err(JwtError::EncodeHeader)?;
    let payload = encode_json(claims).map_err(JwtError::EncodeClaims)?;

    let mut token = String::with_capacity(header.len() + payload.len() + 2);
    token.push_str(&header);
    token.push('.');
    token.push_str(&payload);

    let signature = signer
        .sign(token.as_bytes())
        .map_err(|e| JwtError::Sign(Box::new(e)))?;

    token.push('.');
    token.push_str(&base64url::encode(&signature));

    tracing::trace!(alg, kid = ?kid, "encoded token");
    Ok(Token::new(token))
}

/// Serialize into JSON, then into an unpadded base64url segment.
fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(base64url::encode(&serde_json::to_vec(value)?))
}

/// Verify `token` and return its claims, checking `exp`/`nbf` against the
/// system clock.
///
/// Validation is part of extraction: there is no way to get
/// claims out of a token that failed any check.
///
/// # Errors
/// - `MalformedToken` if the token is not three dot separated segments
/// - `Base64`/`Json` if a segment cannot be decoded
/// - `InvalidSigner` if the header `alg` differs from the verifier's, or both
///   sides name a key id and they differ
/// - the verifier's error, usually `InvalidSignature`
/// - `Expired`/`NotReady` for temporal violations
pub fn decode_claims<C, V>(token: impl AsRef<[u8]>, verifier: &V) -> JwtResult<C>
where
    C: DeserializeOwned,
    V: Verifier + ?Sized,
{
    decode_claims_with(token, verifier, &Validation::default())
}

/// Like [`decode_claims`], with explicit temporal validation options.
///
/// # Errors
/// See [`decode_claims`].
pub fn decode_claims_with<C, V>(
    token: impl AsRef<[u8]>,
    verifier: &V,
    validation: &Validation,
) -> JwtResult<C>
where
    C: DeserializeOwned,
    V: Verifier + ?Sized,
{
    let token = token.as_ref();
    let alg = verifier.algorithm();

    let mut segments = token.split(|b| *b == b'.');
    let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(rejected("split", alg, JwtError::MalformedToken));
    };

    let header_json =
        base64url::decode(header_b64).map_err(|e| JwtError::base64(Segment::Header, e))?;
    let header: HeaderView =
        serde_json::from_slice(&header_json).map_err(|e| JwtError::json(Segment::Header, e))?;

    let claims_json =
        base64url::decode(claims_b64).map_err(|e| JwtError::base64(Segment::Claims, e))?;
    let claims: C =
        serde_json::from_slice(&claims_json).map_err(|e| JwtError::json(Segment::Claims, e))?;
    let lifetime: Lifetime =
        serde_json::from_slice(&claims_json).map_err(|e| JwtError::json(Segment::Claims, e))?;

    // The verifier's own algorithm is authoritative; the header only has to agree.
    // absent or null `alg` compares as empty
    if header.alg.as_deref().unwrap_or_default() != alg {
        return Err(rejected("algorithm", alg, JwtError::InvalidSigner));
    }
    // Key ids are compared only when both the token and the verifier state one.
    if let (Some(expected), Some(actual)) = (
        verifier.key_id(),
        header.kid.as_deref().filter(|kid| !kid.is_empty()),
    ) {
        if expected != actual {
            return Err(rejected("key id", alg, JwtError::InvalidSigner));
        }
    }

    let signature =
        base64url::decode(signature_b64).map_err(|e| JwtError::base64(Segment::Signature, e))?;
    let signing_input = &token[..header_b64.len() + 1 + claims_b64.len()];
    verifier
        .verify(&signature, signing_input)
        .map_err(|e| rejected("signature", alg, e))?;

    validation
        .check(&lifetime)
        .map_err(|e| rejected("lifetime", alg, e))?;

    Ok(claims)
}

/// Out-parameter form of [`decode_claims`].
///
/// `out` is assigned only when the token passed every check; on error it is
/// left exactly as it was.
///
/// # Errors
/// See [`decode_claims`].
pub fn decode_claims_into<C, V>(
    token: impl AsRef<[u8]>,
    verifier: &V,
    out: &mut C,
) -> JwtResult<()>
where
    C: DeserializeOwned,
    V: Verifier + ?Sized,
{
    decode_claims_into_with(token, verifier, &Validation::default(), out)
}

/// Like [`decode_claims_into`], with explicit temporal validation options.
///
/// # Errors
/// See [`decode_claims`].
pub fn decode_claims_into_with<C, V>(
    token: impl AsRef<[u8]>,
    verifier: &V,
    validation: &Validation,
    out: &mut C,
) -> JwtResult<()>
where
    C: DeserializeOwned,
    V: Verifier + ?Sized,
{
    *out = decode_claims_with(token, verifier, validation)?;
    Ok(())
}

/// Decode the header segment without checking the signature.
///
/// # Security
/// Nothing returned here is authenticated. Use it only to choose the
/// algorithm or key for a subsequent [`decode_claims`] call.
///
/// # Errors
/// Returns `Base64` or `Json` errors for the header segment.
pub fn decode_header<H: DeserializeOwned>(token: impl AsRef<[u8]>) -> JwtResult<H> {
    let header_b64 = token
        .as_ref()
        .split(|b| *b == b'.')
        .next()
        .unwrap_or_default();
    let header_json =
        base64url::decode(header_b64).map_err(|e| JwtError::base64(Segment::Header, e))?;
    serde_json::from_slice(&header_json).map_err(|e| JwtError::json(Segment::Header, e))
}

fn rejected(stage: &'static str, alg: &str, err: JwtError) -> JwtError {
    tracing::debug!(stage, alg, error = %err, "token rejected");
    err
}
