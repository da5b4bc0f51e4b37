// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resume storage routes (session-protected).

use crate::error::{AppError, Result};
use crate::models::StoredResume;
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Resume routes (require a session via middleware in routes/mod.rs).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/save", post(save_resume))
        .route("/get-resume", post(get_resume))
}

#[derive(Deserialize)]
struct SaveResumeRequest {
    user: ResumeOwner,
    resume: Map<String, Value>,
}

#[derive(Deserialize)]
struct ResumeOwner {
    email: String,
}

/// Replace the owner's resume with the submitted document.
///
/// Full replace, not a merge: after this call the stored resume is exactly
/// the submitted content (minus the client's wizard `step` marker).
async fn save_resume(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveResumeRequest>,
) -> Result<StatusCode> {
    let profile = state
        .db
        .find_user_by_email(&req.user.email)
        .await?
        .ok_or(AppError::NotRegistered)?;

    let document = StoredResume::from_submission(profile.id, req.resume);
    state.db.replace_resume(&document).await?;

    Ok(StatusCode::OK)
}

#[derive(Deserialize)]
struct GetResumeRequest {
    email: String,
}

/// Fetch the saved resume content; null when none has been saved.
async fn get_resume(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GetResumeRequest>,
) -> Result<Json<Option<Map<String, Value>>>> {
    let profile = state
        .db
        .find_user_by_email(&req.email)
        .await?
        .ok_or(AppError::NotRegistered)?;

    let content = state
        .db
        .get_resume(&profile.id)
        .await?
        .map(StoredResume::into_content);

    Ok(Json(content))
}
