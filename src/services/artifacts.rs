// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory arena for rendered PDF artifacts.
//!
//! Each successful render is parked under a fresh UUID handle, tagged with
//! the producing session's identity. Artifacts are transient: they expire
//! after a TTL, and the arena is bounded, evicting the oldest entry when
//! full. There is no well-known shared output slot, so concurrent renders
//! can never observe each other's bytes.

use bytes::Bytes;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// How long a rendered artifact stays fetchable.
const DEFAULT_ARTIFACT_TTL: Duration = Duration::from_secs(10 * 60);

/// Upper bound on parked artifacts per instance.
const MAX_STORED_ARTIFACTS: usize = 256;

#[derive(Clone)]
struct StoredArtifact {
    owner: String,
    bytes: Bytes,
    created_at: Instant,
}

/// Handle-keyed artifact arena shared across requests.
#[derive(Clone)]
pub struct ArtifactStore {
    entries: Arc<DashMap<Uuid, StoredArtifact>>,
    ttl: Duration,
}

impl ArtifactStore {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_ARTIFACT_TTL)
    }

    /// Create a store with a custom TTL (used by expiry tests).
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Park rendered bytes for `owner` and return the fetch handle.
    pub fn insert(&self, owner: &str, bytes: Bytes) -> Uuid {
        self.sweep_expired();

        // Bounded arena: drop the oldest artifact rather than grow without
        // limit when clients render but never fetch.
        if self.entries.len() >= MAX_STORED_ARTIFACTS {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.value().created_at)
                .map(|entry| *entry.key());
            if let Some(key) = oldest {
                self.entries.remove(&key);
            }
        }

        let handle = Uuid::new_v4();
        self.entries.insert(
            handle,
            StoredArtifact {
                owner: owner.to_string(),
                bytes,
                created_at: Instant::now(),
            },
        );

        handle
    }

    /// Retrieve the artifact for `handle`, if it exists, has not expired,
    /// and belongs to `owner`. Foreign handles look identical to unknown
    /// ones from the caller's side.
    pub fn fetch(&self, handle: &Uuid, owner: &str) -> Option<Bytes> {
        let entry = self.entries.get(handle)?;

        if entry.created_at.elapsed() >= self.ttl {
            drop(entry);
            self.entries.remove(handle);
            return None;
        }

        if entry.owner != owner {
            tracing::debug!(%handle, "Artifact fetch with mismatched owner");
            return None;
        }

        Some(entry.bytes.clone())
    }

    fn sweep_expired(&self) {
        let ttl = self.ttl;
        self.entries
            .retain(|_, artifact| artifact.created_at.elapsed() < ttl);
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new()
    }
}
