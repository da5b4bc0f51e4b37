// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTML-to-PDF render client.
//!
//! Talks to a Chromium-based render engine (Gotenberg-compatible API) over
//! HTTP: the resume HTML is uploaded as a multipart form together with the
//! page geometry, and the engine answers with PDF bytes. A mock mode skips
//! the engine for offline tests.

use anyhow::Context;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use std::time::Duration;

use crate::services::template;

/// Page geometry matching the frontend's resume layout.
const PAGE_WIDTH: &str = "35.7cm";
const PAGE_HEIGHT: &str = "42cm";

/// Engine calls that run longer than this fail with `RenderError::Timeout`.
const RENDER_TIMEOUT: Duration = Duration::from_secs(6);

/// Rendering pipeline failures, categorized for the route layer.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template render failed: {0}")]
    Template(String),
    #[error("render engine failed: {0}")]
    Engine(String),
    #[error("render engine timed out")]
    Timeout,
}

/// Client for the external HTML-to-PDF engine.
#[derive(Clone)]
pub struct RenderClient {
    http: reqwest::Client,
    base_url: String,
    mock: bool,
}

impl RenderClient {
    /// Create a client for the engine at `base_url`.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(RENDER_TIMEOUT)
            .build()
            .context("failed building render HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            mock: false,
        })
    }

    /// Create an offline client that fabricates PDF bytes from the HTML.
    ///
    /// Intended for tests: content still flows through the real template,
    /// so per-user output isolation stays observable without an engine.
    pub fn new_mock() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: String::new(),
            mock: true,
        }
    }

    /// Render resume content into PDF bytes.
    ///
    /// The document goes through the pure HTML template first, then to the
    /// engine. Engine failures and timeouts map to separate categories so
    /// callers can answer 502 vs 504.
    pub async fn render_pdf(&self, content: &Map<String, Value>) -> Result<Bytes, RenderError> {
        let html =
            template::resume_html(content).map_err(|e| RenderError::Template(e.to_string()))?;

        if self.mock {
            return Ok(Bytes::from(format!("%PDF-1.4\n{html}")));
        }

        let url = format!("{}/forms/chromium/convert/html", self.base_url);

        let form = Form::new()
            .part(
                "files",
                Part::text(html)
                    .file_name("index.html")
                    .mime_str("text/html")
                    .map_err(|e| RenderError::Engine(e.to_string()))?,
            )
            .text("paperWidth", PAGE_WIDTH)
            .text("paperHeight", PAGE_HEIGHT);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            return Err(RenderError::Engine(format!(
                "engine returned status {}",
                response.status()
            )));
        }

        response.bytes().await.map_err(map_transport_error)
    }
}

fn map_transport_error(err: reqwest::Error) -> RenderError {
    if err.is_timeout() {
        RenderError::Timeout
    } else {
        RenderError::Engine(err.to_string())
    }
}
