// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod artifacts;
pub mod google;
pub mod render;
pub mod session;
pub mod template;

pub use artifacts::ArtifactStore;
pub use google::{GoogleTokenVerifier, IdentityAssertion, VerificationError};
pub use render::{RenderClient, RenderError};
pub use session::{SessionClaims, TokenError};
