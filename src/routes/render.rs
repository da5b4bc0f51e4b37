// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PDF rendering routes (session-protected).

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use uuid::Uuid;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Render routes (require a session via middleware in routes/mod.rs).
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/create-pdf", post(create_pdf))
        .route("/fetch-pdf/{handle}", get(fetch_pdf))
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CreatePdfResponse {
    /// Opaque fetch handle for the rendered artifact.
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub handle: Uuid,
}

/// Render the submitted resume content and park the PDF for fetching.
///
/// Each render gets its own handle scoped to this session's identity;
/// concurrent renders never share an output slot.
async fn create_pdf(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(content): Json<Map<String, Value>>,
) -> Result<Json<CreatePdfResponse>> {
    let bytes = state.render.render_pdf(&content).await?;
    let size = bytes.len();
    let handle = state.artifacts.insert(&user.email, bytes);

    tracing::info!(%handle, bytes = size, "Rendered resume PDF");

    Ok(Json(CreatePdfResponse { handle }))
}

/// Download a previously rendered PDF by handle.
///
/// Unknown, expired, and foreign handles all answer 404.
async fn fetch_pdf(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(handle): Path<String>,
) -> Result<impl IntoResponse> {
    let handle = Uuid::parse_str(&handle)
        .map_err(|_| AppError::NotFound("No rendered resume for that handle".to_string()))?;

    let bytes = state
        .artifacts
        .fetch(&handle, &user.email)
        .ok_or_else(|| AppError::NotFound("No rendered resume for that handle".to_string()))?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"Resume.pdf\"",
            ),
            (header::CACHE_CONTROL, "no-store"),
        ],
        bytes,
    ))
}
