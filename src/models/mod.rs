// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod resume;
pub mod user;

pub use resume::StoredResume;
pub use user::{UserProfile, UserResponse};
