// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API authentication and CORS tests.
//!
//! These tests verify that:
//! 1. Protected routes reject requests without valid session tokens
//! 2. Protected routes accept requests with valid tokens
//! 3. CORS preflight requests return correct headers
//! 4. Public routes stay reachable without a session

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use resume_builder::middleware::auth::SESSION_COOKIE;
use resume_builder::services::session::SessionClaims;
use std::time::{SystemTime, UNIX_EPOCH};
use tower::ServiceExt;

mod common;

/// Create an expired-but-correctly-signed session token.
fn create_expired_token(email: &str, signing_key: &[u8]) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as usize;

    let claims = SessionClaims {
        sub: email.to_string(),
        iat: now - 2 * 86400,
        exp: now - 86400,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(signing_key),
    )
    .unwrap()
}

fn save_request_body() -> Body {
    Body::from(
        serde_json::json!({
            "user": { "email": "ann@example.com" },
            "resume": { "firstName": "Ann" }
        })
        .to_string(),
    )
}

#[tokio::test]
async fn test_protected_route_without_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/save")
                .header(header::CONTENT_TYPE, "application/json")
                .body(save_request_body())
                .unwrap(),
        )
        .await
        .unwrap();

    // Should return 401 Unauthorized without token
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_all_protected_routes_require_auth() {
    for (method, uri) in [
        ("POST", "/save"),
        ("POST", "/get-resume"),
        ("POST", "/create-pdf"),
        ("GET", "/fetch-pdf/00000000-0000-0000-0000-000000000000"),
    ] {
        let (app, _) = common::create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri} should require a session"
        );
    }
}

#[tokio::test]
async fn test_protected_route_with_invalid_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/save")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, "Bearer invalid.token.here")
                .body(save_request_body())
                .unwrap(),
        )
        .await
        .unwrap();

    // Should return 401 Unauthorized with invalid token
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_expired_token() {
    let (app, state) = common::create_test_app();
    let token = create_expired_token("ann@example.com", &state.config.session_signing_key);

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/save")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(save_request_body())
                .unwrap(),
        )
        .await
        .unwrap();

    // Signature is valid but the token is expired
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_valid_token() {
    let (app, _) = common::create_test_app();
    let token = common::test_session_token("ann@example.com");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/save")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(save_request_body())
                .unwrap(),
        )
        .await
        .unwrap();

    // With valid token: 200 if Firestore available, 500 if Firestore unavailable (mock db without emulator)
    // The key check is that we DON'T get 401 (authentication succeeded)
    let status = response.status();
    assert!(
        status == StatusCode::OK || status == StatusCode::INTERNAL_SERVER_ERROR,
        "Expected 200 or 500, got {}. Auth should pass, Firestore may fail without emulator.",
        status
    );
}

#[tokio::test]
async fn test_session_cookie_accepted() {
    let (app, _) = common::create_test_app();
    let token = common::test_session_token("ann@example.com");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/save")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, format!("{}={}", SESSION_COOKIE, token))
                .body(save_request_body())
                .unwrap(),
        )
        .await
        .unwrap();

    // Cookie transport should authenticate exactly like the Bearer header
    let status = response.status();
    assert!(
        status == StatusCode::OK || status == StatusCode::INTERNAL_SERVER_ERROR,
        "Expected 200 or 500, got {}",
        status
    );
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/save")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // OPTIONS should return 200 (CORS preflight success)
    assert_eq!(response.status(), StatusCode::OK);

    // Should have CORS headers
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn test_cors_rejects_unknown_origin() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/save")
                .header(header::ORIGIN, "https://evil.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // The predicate only allows the frontend URL and localhost origins
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn test_public_route_no_auth_required() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Health should be accessible without auth
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_root_greeting() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&body[..], b"Hello from 'Resume Builder' Web App");
}

#[tokio::test]
async fn test_signup_with_garbage_credential() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/signup")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "credential": "garbage" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    // Fails at JWT header decode, before any network or database call
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Invalid user detected. Please try again");
}

#[tokio::test]
async fn test_verify_token_with_garbage_token() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/verifyToken")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    serde_json::json!({ "token": "garbage" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["message"], "Token verification failed");
}

#[tokio::test]
async fn test_security_headers_present() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.contains_key("strict-transport-security"));
    assert_eq!(headers.get("referrer-policy").unwrap(), "no-referrer");
}
