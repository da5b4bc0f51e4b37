//! Application configuration loaded from environment variables.
//!
//! All values are read once at startup; the session signing key is
//! immutable for the life of the process.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend origin allowed by CORS
    pub frontend_url: String,
    /// GCP project ID for Firestore
    pub gcp_project_id: String,
    /// Google OAuth client ID (expected audience of incoming ID tokens)
    pub google_client_id: String,
    /// HMAC signing key for session tokens (raw bytes)
    pub session_signing_key: Vec<u8>,
    /// Base URL of the HTML-to-PDF render engine
    pub render_engine_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// For local development a `.env` file is honored. The signing key and
    /// Google client ID have no defaults; startup fails without them.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .unwrap_or(4000),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            google_client_id: env::var("GOOGLE_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("GOOGLE_CLIENT_ID"))?,
            session_signing_key: env::var("SESSION_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("SESSION_SIGNING_KEY"))?
                .into_bytes(),
            render_engine_url: env::var("RENDER_ENGINE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| "http://localhost:3001".to_string()),
        })
    }

    /// Fixed configuration for tests; never used in production paths.
    pub fn test_default() -> Self {
        Self {
            port: 4000,
            frontend_url: "http://localhost:3000".to_string(),
            gcp_project_id: "test-project".to_string(),
            google_client_id: "test-client-id.apps.googleusercontent.com".to_string(),
            session_signing_key: b"test_session_key_32_bytes_min!!!".to_vec(),
            render_engine_url: "http://localhost:3001".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
