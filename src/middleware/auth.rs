// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session authentication middleware.
//!
//! `session::decode` only proves the signature; the expiry decision lives
//! here, in one place, for every route that accepts a session token.

use crate::error::AppError;
use crate::services::session;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

/// Cookie that may carry the session token.
pub const SESSION_COOKIE: &str = "resume_session";

/// Authenticated identity extracted from a session token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

/// Validate a session token: signature first, then expiry.
///
/// Expired-but-correctly-signed tokens are rejected. Every call site that
/// accepts a token goes through this function, so that policy is defined
/// exactly once.
pub fn authenticate(token: &str, signing_key: &[u8]) -> Result<AuthUser, AppError> {
    let claims = session::decode(token, signing_key)?;

    let now = session::now_unix_secs().map_err(AppError::Internal)?;
    if claims.is_expired(now) {
        tracing::debug!(sub = %claims.sub, "Rejected expired session token");
        return Err(AppError::InvalidToken);
    }

    Ok(AuthUser { email: claims.sub })
}

/// Middleware that requires a valid, unexpired session.
pub async fn require_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    // Try cookie first, then header
    let token = if let Some(cookie) = jar.get(SESSION_COOKIE) {
        cookie.value().to_string()
    } else {
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        match auth_header {
            Some(h) if h.starts_with("Bearer ") => h[7..].to_string(),
            _ => return Err(AppError::Unauthorized),
        }
    };

    let auth_user = authenticate(&token, &state.config.session_signing_key)?;
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}
