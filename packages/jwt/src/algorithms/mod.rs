//! Concrete signing algorithm families.

pub mod hmac;
pub mod none;
pub mod rsa;

pub use self::hmac::Hmac;
pub use self::none::NoneAlgorithm;
pub use self::rsa::{RsaSigner, RsaVerifier};

/// Empty key ids mean "no key id".
pub(crate) fn non_empty(key_id: impl Into<String>) -> Option<String> {
    Some(key_id.into()).filter(|kid| !kid.is_empty())
}
