// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Verification and token failures surface as user-facing messages;
//! storage and render failures are logged with full detail and reach the
//! client only as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::google::VerificationError;
use crate::services::render::RenderError;
use crate::services::session::TokenError;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired session token")]
    InvalidToken,

    #[error("Credential verification failed: {0}")]
    InvalidCredential(String),

    #[error("Unknown user")]
    NotRegistered,

    #[error("Duplicate registration")]
    AlreadyRegistered,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<VerificationError> for AppError {
    fn from(err: VerificationError) -> Self {
        match err {
            VerificationError::Rejected(detail) | VerificationError::Unavailable(detail) => {
                AppError::InvalidCredential(detail)
            }
        }
    }
}

impl From<TokenError> for AppError {
    fn from(_: TokenError) -> Self {
        AppError::InvalidToken
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Authentication required"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "Token verification failed"),
            AppError::InvalidCredential(detail) => {
                tracing::debug!(detail = %detail, "Credential verification rejected");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid user detected. Please try again",
                )
            }
            AppError::NotRegistered => (
                StatusCode::BAD_REQUEST,
                "You are not registered. Please sign up",
            ),
            AppError::AlreadyRegistered => (
                StatusCode::CONFLICT,
                "You are already registered. Please log in",
            ),
            AppError::NotFound(msg) => {
                return (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse {
                        message: msg.clone(),
                    }),
                )
                    .into_response();
            }
            AppError::BadRequest(msg) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        message: msg.clone(),
                    }),
                )
                    .into_response();
            }
            AppError::Database(msg) => {
                tracing::error!(error = %msg, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Render(err) => {
                tracing::error!(error = %err, "Render pipeline error");
                let status = match err {
                    RenderError::Timeout => StatusCode::GATEWAY_TIMEOUT,
                    RenderError::Engine(_) => StatusCode::BAD_GATEWAY,
                    RenderError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                (status, "An error occurred. PDF generation failed")
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = ErrorResponse {
            message: message.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
