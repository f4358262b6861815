//! The unsecured `none` algorithm.

use crate::{
    error::JwtResult,
    traits::{Signer, Verifier},
};

/// Unsecured JWS (`alg: none`, RFC 7518 section 3.6).
///
/// # Security
/// Signs with an empty signature and accepts every signature. It exists for
/// tests and tooling only; a token accepted by this verifier proves nothing
/// about who produced it and must never back a trust decision.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoneAlgorithm;

impl Verifier for NoneAlgorithm {
    fn algorithm(&self) -> &str {
        "none"
    }

    fn verify(&self, _signature: &[u8], _signing_input: &[u8]) -> JwtResult<()> {
        Ok(())
    }
}

impl Signer for NoneAlgorithm {
    fn sign(&self, _signing_input: &[u8]) -> JwtResult<Vec<u8>> {
        Ok(Vec::new())
    }
}
