//! User model for storage and API.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

use crate::services::google::IdentityAssertion;

/// User profile stored in Firestore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable user ID (UUID v4); doubles as the resume document ID
    pub id: String,
    /// Verified email address (unique; the document ID is its URL-encoded form)
    pub email: String,
    /// First name from the identity credential
    pub first_name: String,
    /// Last name from the identity credential
    pub last_name: String,
    /// Profile picture URL (may be None if not shared)
    pub picture_url: Option<String>,
    /// Most recently issued session token
    pub session_token: String,
    /// When the user signed up (RFC 3339)
    pub created_at: String,
    /// Last successful login (RFC 3339)
    pub last_login: String,
}

impl UserProfile {
    /// Build a fresh profile from a verified identity assertion.
    pub fn new(assertion: IdentityAssertion, session_token: String) -> Self {
        let now = now_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            email: assertion.email,
            first_name: assertion.given_name,
            last_name: assertion.family_name,
            picture_url: assertion.picture,
            session_token,
            created_at: now.clone(),
            last_login: now,
        }
    }

    /// Record a successful login with a newly issued session token.
    pub fn record_login(&mut self, session_token: String) {
        self.session_token = session_token;
        self.last_login = now_rfc3339();
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// User fields returned to the frontend after signup/login.
///
/// Deliberately omits the internal document ID and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserResponse {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub picture_url: Option<String>,
    pub session_token: String,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            picture_url: profile.picture_url,
            session_token: profile.session_token,
        }
    }
}
