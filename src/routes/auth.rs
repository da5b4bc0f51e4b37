// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication routes: token verification, signup, and login.

use crate::error::{AppError, Result};
use crate::middleware::auth::authenticate;
use crate::models::{StoredResume, UserProfile, UserResponse};
use crate::services::session;
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/verifyToken", post(verify_token))
        .route("/signup", post(signup))
        .route("/login", post(login))
}

// ─── Session Verification ────────────────────────────────────

#[derive(Deserialize)]
struct VerifyTokenRequest {
    token: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct VerifyTokenResponse {
    pub status: String,
}

/// Check a session token for a returning client: signature, expiry, then
/// registration. 401 means the token is bad; 400 means the account is
/// unknown.
async fn verify_token(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VerifyTokenRequest>,
) -> Result<Json<VerifyTokenResponse>> {
    let user = authenticate(&req.token, &state.config.session_signing_key)?;

    if state.db.find_user_by_email(&user.email).await?.is_none() {
        return Err(AppError::NotRegistered);
    }

    Ok(Json(VerifyTokenResponse {
        status: "Success".to_string(),
    }))
}

// ─── Signup ──────────────────────────────────────────────────

#[derive(Deserialize)]
struct CredentialRequest {
    credential: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Register a new account from a verified Google credential.
async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialRequest>,
) -> Result<(StatusCode, Json<SignupResponse>)> {
    let assertion = state.google.verify_id_token(&req.credential).await?;

    // Explicit existence check before insert; the email-keyed insert below
    // still backstops a concurrent duplicate signup.
    if state
        .db
        .find_user_by_email(&assertion.email)
        .await?
        .is_some()
    {
        return Err(AppError::AlreadyRegistered);
    }

    let token = session::issue(&assertion.email, &state.config.session_signing_key)?;
    let user = UserProfile::new(assertion, token);
    state.db.create_user(&user).await?;

    tracing::info!(email = %user.email, "New user signup");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Signup was successful".to_string(),
            user: user.into(),
        }),
    ))
}

// ─── Login ───────────────────────────────────────────────────

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserResponse,
    /// Saved resume content; null for accounts that have not saved one.
    #[cfg_attr(
        feature = "binding-generation",
        ts(type = "Record<string, unknown> | null")
    )]
    pub resume: Option<Map<String, Value>>,
}

/// Log in with a verified Google credential.
///
/// Issues a fresh session token and persists it on the profile, replacing
/// the previous one.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CredentialRequest>,
) -> Result<(StatusCode, Json<LoginResponse>)> {
    let assertion = state.google.verify_id_token(&req.credential).await?;

    let mut profile = state
        .db
        .find_user_by_email(&assertion.email)
        .await?
        .ok_or(AppError::NotRegistered)?;

    let token = session::issue(&profile.email, &state.config.session_signing_key)?;
    profile.record_login(token);
    state.db.upsert_user(&profile).await?;

    let resume = state
        .db
        .get_resume(&profile.id)
        .await?
        .map(StoredResume::into_content);

    tracing::info!(email = %profile.email, "User login");

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            message: "Login was successful".to_string(),
            user: profile.into(),
            resume,
        }),
    ))
}
