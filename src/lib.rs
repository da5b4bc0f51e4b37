// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Resume Builder backend API.
//!
//! This crate provides Google Sign-In authentication with JWT sessions,
//! one-resume-per-user storage in Firestore, and an HTML-to-PDF rendering
//! pipeline with per-request artifact handles.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::FirestoreDb;
use services::{ArtifactStore, GoogleTokenVerifier, RenderClient};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
    pub google: Arc<GoogleTokenVerifier>,
    pub render: RenderClient,
    pub artifacts: ArtifactStore,
}
