// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs over `{sub: email, iat, exp}` with a one-day
//! lifetime. `decode` checks the signature only and hands the claims
//! (including expiry) back as data; enforcing expiry is the caller's
//! decision, made once in the auth middleware rather than here.

use jsonwebtoken::{
    decode as jwt_decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Session lifetime: one day.
pub const SESSION_TTL_SECS: usize = 24 * 60 * 60;

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    /// Subject (the user's email)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
}

impl SessionClaims {
    /// Whether the token's expiry has passed.
    pub fn is_expired(&self, now_secs: usize) -> bool {
        self.exp <= now_secs
    }
}

/// Session token verification failures.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("signature verification failed")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

/// Sign a session token for an email identity.
pub fn issue(email: &str, signing_key: &[u8]) -> anyhow::Result<String> {
    let now = now_unix_secs()?;

    let claims = SessionClaims {
        sub: email.to_string(),
        iat: now,
        exp: now + SESSION_TTL_SECS,
    };

    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )?)
}

/// Verify a session token's signature and return its claims.
///
/// Expiry is NOT checked here; it comes back inside the claims for the
/// caller to act on.
pub fn decode(token: &str, signing_key: &[u8]) -> Result<SessionClaims, TokenError> {
    let key = DecodingKey::from_secret(signing_key);
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;

    let token_data = jwt_decode::<SessionClaims>(token, &key, &validation).map_err(|err| {
        match err.kind() {
            ErrorKind::InvalidSignature => TokenError::InvalidSignature,
            _ => TokenError::Malformed,
        }
    })?;

    Ok(token_data.claims)
}

/// Current Unix time in seconds.
pub(crate) fn now_unix_secs() -> anyhow::Result<usize> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs() as usize)
}
