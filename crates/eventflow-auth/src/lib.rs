//! Eventflow Auth — bearer credential verification.
//!
//! Tokens are issued by an external identity provider; this crate only
//! checks that a presented credential is well-formed, correctly signed with
//! the shared secret, and unexpired. It performs no user lookup and makes
//! no authorization-to-resource decision.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a credential was rejected. Callers collapse all variants into one
/// opaque 401 response; the distinction exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthRejection {
    /// No authorization header was presented.
    #[error("credential missing")]
    MissingCredential,

    /// The header does not split into `<scheme> <token>`.
    #[error("credential malformed")]
    MalformedCredential,

    /// Signature verification failed, a time-bound claim elapsed, or the
    /// signing algorithm is not an allowed one.
    #[error("credential invalid or expired")]
    InvalidOrExpired,
}

/// Registered claims the verifier cares about. Extra claims in the token
/// are ignored.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    exp: i64,
}

/// Verifies bearer credentials against a shared HS256 secret.
///
/// Built once at startup and injected into the request path; verification
/// is purely local, with no network round trip.
#[derive(Clone)]
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Creates a verifier for the given shared secret. HS256 is the only
    /// allowed algorithm; tokens signed any other way fail closed.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Validates the raw value of an authorization header, expected to be
    /// of the form `"<scheme> <token>"`. The scheme word itself is not
    /// interpreted.
    ///
    /// # Errors
    ///
    /// Returns the applicable [`AuthRejection`] when the header is absent,
    /// has no second part, or carries a token that does not verify.
    pub fn validate_header(&self, header: Option<&str>) -> Result<(), AuthRejection> {
        let header = header.ok_or(AuthRejection::MissingCredential)?;
        let token = header
            .split_whitespace()
            .nth(1)
            .ok_or(AuthRejection::MalformedCredential)?;

        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|_| ())
            .map_err(|_| AuthRejection::InvalidOrExpired)
    }
}

/// Mints an HS256 token that expires `ttl` from now. Intended for tests and
/// local tooling; production tokens come from the identity provider.
///
/// # Errors
///
/// Returns the underlying encoding error if signing fails.
pub fn mint_token(secret: &str, ttl: Duration) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        exp: (Utc::now() + ttl).timestamp(),
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}
