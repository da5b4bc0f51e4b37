// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resume Builder API Server
//!
//! Backend for the Resume Builder web app: Google Sign-In authentication,
//! single-resume-per-user storage, and PDF rendering.

use resume_builder::{
    config::Config,
    db::FirestoreDb,
    services::{ArtifactStore, GoogleTokenVerifier, RenderClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured JSON logging for GCP
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Resume Builder API");

    // Initialize Firestore database
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    // Initialize Google credential verifier
    let google =
        Arc::new(GoogleTokenVerifier::new(&config).expect("Failed to initialize token verifier"));

    // Initialize render-engine client
    let render =
        RenderClient::new(&config.render_engine_url).expect("Failed to initialize render client");
    tracing::info!(engine = %config.render_engine_url, "Render client initialized");

    // In-memory artifact arena, shared across requests
    let artifacts = ArtifactStore::new();

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        google,
        render,
        artifacts,
    });

    // Build router
    let app = resume_builder::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging (GCP-compliant).
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("resume_builder=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
