// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token compatibility tests.
//!
//! These tests verify that tokens issued by the signup/login flow are
//! accepted by the auth middleware, catching claim-format or algorithm
//! drift between the two sides early.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use resume_builder::error::AppError;
use resume_builder::middleware::authenticate;
use resume_builder::services::session::{self, SessionClaims, SESSION_TTL_SECS};
use std::time::{SystemTime, UNIX_EPOCH};

const SIGNING_KEY: &[u8] = b"test_session_key_32_bytes_min!!!";

fn unix_now() -> usize {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize
}

/// Encode claims directly, bypassing `session::issue`, so tests can
/// fabricate expired or oddly-timed tokens.
fn encode_claims(claims: &SessionClaims, signing_key: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(signing_key),
    )
    .expect("Failed to encode claims")
}

#[test]
fn test_issued_token_passes_middleware_authentication() {
    // A token from the login flow must be accepted by the middleware.
    let token = session::issue("ann@example.com", SIGNING_KEY).unwrap();

    let user = authenticate(&token, SIGNING_KEY).expect("Fresh token should authenticate");
    assert_eq!(user.email, "ann@example.com");
}

#[test]
fn test_issued_token_expiry_is_one_day() {
    let token = session::issue("ann@example.com", SIGNING_KEY).unwrap();
    let claims = session::decode(&token, SIGNING_KEY).unwrap();

    assert_eq!(claims.sub, "ann@example.com");
    assert_eq!(claims.exp, claims.iat + SESSION_TTL_SECS);

    let now = unix_now();
    assert!(claims.iat <= now, "iat should not be in the future");
    assert!(
        claims.exp > now + SESSION_TTL_SECS - 60,
        "Token should expire roughly one day out"
    );
}

#[test]
fn test_expired_token_rejected_by_middleware() {
    // Correctly signed but past its exp: the signature check passes and
    // the middleware's expiry policy rejects it.
    let now = unix_now();
    let claims = SessionClaims {
        sub: "ann@example.com".to_string(),
        iat: now - 2 * SESSION_TTL_SECS,
        exp: now - SESSION_TTL_SECS,
    };
    let token = encode_claims(&claims, SIGNING_KEY);

    let err = authenticate(&token, SIGNING_KEY).unwrap_err();
    assert!(matches!(err, AppError::InvalidToken));
}

#[test]
fn test_expired_token_still_decodes_as_data() {
    // decode() is signature-only; callers see the expiry as claims data.
    let now = unix_now();
    let claims = SessionClaims {
        sub: "ann@example.com".to_string(),
        iat: now - 2 * SESSION_TTL_SECS,
        exp: now - SESSION_TTL_SECS,
    };
    let token = encode_claims(&claims, SIGNING_KEY);

    let decoded = session::decode(&token, SIGNING_KEY).expect("Signature is valid");
    assert_eq!(decoded.sub, "ann@example.com");
    assert!(decoded.is_expired(now));
}

#[test]
fn test_token_signed_with_wrong_key_rejected() {
    let token = session::issue("ann@example.com", b"another_signing_key_entirely!!!!").unwrap();

    let err = authenticate(&token, SIGNING_KEY).unwrap_err();
    assert!(matches!(err, AppError::InvalidToken));
}

#[test]
fn test_malformed_token_rejected() {
    for garbage in ["", "not-a-jwt", "a.b", "a.b.c.d", "ey.ey.ey"] {
        let err = authenticate(garbage, SIGNING_KEY)
            .expect_err("Garbage token should never authenticate");
        assert!(matches!(err, AppError::InvalidToken), "input: {garbage:?}");
    }
}

#[test]
fn test_token_at_exact_expiry_is_rejected() {
    // exp <= now counts as expired.
    let now = unix_now();
    let claims = SessionClaims {
        sub: "ann@example.com".to_string(),
        iat: now - SESSION_TTL_SECS,
        exp: now,
    };
    let token = encode_claims(&claims, SIGNING_KEY);

    let err = authenticate(&token, SIGNING_KEY).unwrap_err();
    assert!(matches!(err, AppError::InvalidToken));
}
