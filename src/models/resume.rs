// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Resume document model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user's resume document as stored in Firestore.
///
/// The resume body is schemaless: the frontend owns its shape and the
/// backend persists whatever object it is given. Only `owner_id` is
/// interpreted server-side; it doubles as the document ID, so there is
/// at most one resume per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredResume {
    /// ID of the owning user (also the document ID)
    pub owner_id: String,
    /// Schemaless resume content
    #[serde(flatten)]
    pub content: Map<String, Value>,
}

impl StoredResume {
    /// Build a storable document from a client submission.
    ///
    /// Strips `step` (client-side wizard progress, not resume content)
    /// and any stray `owner_id` key so the flattened document carries
    /// exactly one owner field.
    pub fn from_submission(owner_id: String, mut content: Map<String, Value>) -> Self {
        content.remove("step");
        content.remove("owner_id");
        Self { owner_id, content }
    }

    /// Resume content with ownership metadata removed, as returned to clients.
    pub fn into_content(self) -> Map<String, Value> {
        self.content
    }
}
