//! Compact JSON Web Token (RFC 7519 / RFC 7515) encoding and verification
//!
//! This crate provides:
//! - HS256/HS384/HS512 and RS256/RS384/RS512 signing algorithms
//! - Encoding of any `Serialize` claims into `header.payload.signature`
//! - Decoding that checks algorithm, key id, signature and `exp`/`nbf` before
//!   any claims are returned
//!
//! ```
//! use compact_jwt::{decode_claims, encode, Hmac};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, PartialEq, Serialize, Deserialize)]
//! struct Payload {
//!     email: String,
//!     admin: bool,
//! }
//!
//! let signer = Hmac::hs256(b"asdosiahodihqw8qwhqpwfjpfoafphpfwhpqf", "");
//! let payload = Payload { email: "john.smith@example.com".into(), admin: true };
//!
//! let token = encode(&signer, &payload)?;
//! let decoded: Payload = decode_claims(&token, &signer)?;
//! assert_eq!(decoded, payload);
//! # Ok::<(), compact_jwt::JwtError>(())
//! ```

pub mod algorithms;
pub mod base64url;
mod codec;
mod error;
mod hash;
mod traits;
mod types;
mod validation;

pub use algorithms::{Hmac, NoneAlgorithm, RsaSigner, RsaVerifier};
pub use codec::{
    decode_claims, decode_claims_into, decode_claims_into_with, decode_claims_with,
    decode_header, encode,
};
pub use error::{ErrorKind, JwtError, JwtResult, Segment};
pub use hash::{recommended_key_size, HashAlgorithm};
pub use traits::{Signer, Verifier};
pub use types::{Header, Token};
pub use validation::Validation;

/// RSA key types accepted by the RSA constructors.
pub use ::rsa::{RsaPrivateKey, RsaPublicKey};
