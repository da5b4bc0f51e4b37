// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resume HTML templating.
//!
//! A pure transform from resume content to printable markup: no I/O,
//! deterministic for a given document, HTML-escaped. The template is
//! embedded at compile time and parsed once per process.

use minijinja::Environment;
use serde_json::{Map, Value};
use std::sync::OnceLock;

const RESUME_TEMPLATE: &str = include_str!("../../templates/resume.html");

static TEMPLATES: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> &'static Environment<'static> {
    TEMPLATES.get_or_init(|| {
        let mut env = Environment::new();
        env.add_template("resume.html", RESUME_TEMPLATE)
            .expect("embedded resume template parses");
        env
    })
}

/// Render resume content into the printable HTML document.
///
/// Unknown fields are ignored; missing sections are omitted from the
/// output rather than failing the render.
pub fn resume_html(content: &Map<String, Value>) -> Result<String, minijinja::Error> {
    environment().get_template("resume.html")?.render(content)
}
