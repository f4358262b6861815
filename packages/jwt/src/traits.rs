//! Signing and verification capabilities.

use crate::error::JwtResult;

/// Signature verification capability.
///
/// A verifier can only check a signature, never create one, because the
/// asymmetric families verify with a different key than they sign with.
/// Implementations must be thread-safe (Send + Sync).
pub trait Verifier: Send + Sync {
    /// JWS `alg` value as defined in RFC 7518 section 3.1.
    fn algorithm(&self) -> &str;

    /// Check `signature` against `signing_input`.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidSignature` when the signature does not match.
    fn verify(&self, signature: &[u8], signing_input: &[u8]) -> JwtResult<()>;

    /// Key identifier, when this key was given one.
    ///
    /// The encoder writes it as the header `kid`; the decoder only compares it
    /// when both the token and the verifier carry one.
    fn key_id(&self) -> Option<&str> {
        None
    }
}

/// Signature creation capability. Every signer is also a verifier.
pub trait Signer: Verifier {
    /// Compute the signature over `signing_input`.
    ///
    /// # Errors
    /// Returns an error if the underlying primitive fails.
    fn sign(&self, signing_input: &[u8]) -> JwtResult<Vec<u8>>;
}

macro_rules! forward_impls {
    ($($ptr:ty),*) => {$(
        impl<T: Verifier + ?Sized> Verifier for $ptr {
            fn algorithm(&self) -> &str {
                (**self).algorithm()
            }

            fn verify(&self, signature: &[u8], signing_input: &[u8]) -> JwtResult<()> {
                (**self).verify(signature, signing_input)
            }

            fn key_id(&self) -> Option<&str> {
                (**self).key_id()
            }
        }

        impl<T: Signer + ?Sized> Signer for $ptr {
            fn sign(&self, signing_input: &[u8]) -> JwtResult<Vec<u8>> {
                (**self).sign(signing_input)
            }
        }
    )*};
}

forward_impls!(&T, Box<T>, std::sync::Arc<T>);
