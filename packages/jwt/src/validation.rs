//! Temporal validation options.

use crate::{
    error::{JwtError, JwtResult},
    types::Lifetime,
};
use chrono::{DateTime, Duration, Utc};

/// Options for the `exp`/`nbf` checks run after the signature verified.
///
/// The default has no leeway, so a token is expired once `exp < now` and not
/// ready while `nbf > now`, both compared in whole Unix seconds.
#[derive(Debug, Clone)]
pub struct Validation {
    /// Leeway for time-based claims.
    pub leeway: Duration,
    /// Validate expiry.
    pub validate_exp: bool,
    /// Validate not-before.
    pub validate_nbf: bool,
    /// Evaluate at this instant instead of the system clock.
    pub now: Option<DateTime<Utc>>,
}

impl Default for Validation {
    fn default() -> Self {
        Self {
            leeway: Duration::zero(),
            validate_exp: true,
            validate_nbf: true,
            now: None,
        }
    }
}

impl Validation {
    /// Set the time leeway for validation.
    #[must_use]
    pub fn with_leeway(mut self, leeway: Duration) -> Self {
        self.leeway = leeway;
        self
    }

    /// Set whether to validate expiration.
    #[must_use]
    pub fn validate_expiration(mut self, validate: bool) -> Self {
        self.validate_exp = validate;
        self
    }

    /// Set whether to validate not-before.
    #[must_use]
    pub fn validate_not_before(mut self, validate: bool) -> Self {
        self.validate_nbf = validate;
        self
    }

    /// Evaluate the temporal claims at a fixed instant.
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub(crate) fn check(&self, lifetime: &Lifetime) -> JwtResult<()> {
        let now = self.now.unwrap_or_else(Utc::now).timestamp();
        let leeway = self.leeway.num_seconds();

        if self.validate_exp {
            if let Some(exp) = lifetime.expires_at() {
                if exp.saturating_add(leeway) < now {
                    return Err(JwtError::Expired);
                }
            }
        }
        if self.validate_nbf {
            if let Some(nbf) = lifetime.not_before() {
                if nbf.saturating_sub(leeway) > now {
                    return Err(JwtError::NotReady);
                }
            }
        }
        Ok(())
    }
}
