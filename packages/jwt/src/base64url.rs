//! Base64url codec for token segments (RFC 7515 section 2)
//!
//! Segments are written without `=` padding. On the way back in the padding is
//! restored before the padded URL-safe alphabet decoder runs, so a segment whose
//! length is `1 (mod 4)` is rejected as an invalid length.

use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine as _,
};
use std::borrow::Cow;

/// Encode bytes as base64url with the padding stripped.
#[inline]
#[must_use]
pub fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode an unpadded base64url segment.
///
/// # Errors
/// Returns `base64::DecodeError` when the input has characters outside the
/// base64url alphabet or an impossible length.
#[inline]
pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE.decode(fix_padding(input.as_ref()))
}

/// Append `=` until the length is a multiple of four.
fn fix_padding(input: &[u8]) -> Cow<'_, [u8]> {
    match input.len() % 4 {
        0 => Cow::Borrowed(input),
        n => {
            let mut padded = Vec::with_capacity(input.len() + 4 - n);
            padded.extend_from_slice(input);
            padded.resize(input.len() + 4 - n, b'=');
            Cow::Owned(padded)
        }
    }
}
