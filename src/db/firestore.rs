// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Two collections back the whole service:
//! - `users`: one profile per email (document ID = URL-encoded email)
//! - `resume`: one document per user (document ID = owner's user ID)
//!
//! Keying both collections by their uniqueness constraint makes the
//! "at most one" invariants structural: creating a duplicate user is a
//! storage-level conflict, and replacing a resume is a single document
//! write rather than a delete-then-insert pair.

use crate::db::collections;
use crate::error::AppError;
use crate::models::{StoredResume, UserProfile};

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing async-trait
        // or a custom TokenSource implementation struct.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Look up a user profile by email.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<UserProfile>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::USERS)
            .obj()
            .one(&user_doc_id(email))
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a user profile; fails if the email is already registered.
    ///
    /// The email-keyed document ID turns a concurrent double-signup into a
    /// storage conflict instead of a second profile.
    pub async fn create_user(&self, user: &UserProfile) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .insert()
            .into(collections::USERS)
            .document_id(user_doc_id(&user.email))
            .object(user)
            .execute()
            .await
            .map_err(|e| match e {
                firestore::errors::FirestoreError::DataConflictError(_) => {
                    AppError::AlreadyRegistered
                }
                other => AppError::Database(other.to_string()),
            })?;
        Ok(())
    }

    /// Create or replace a user profile (login refreshes the session token).
    pub async fn upsert_user(&self, user: &UserProfile) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user_doc_id(&user.email))
            .object(user)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Resume Operations ───────────────────────────────────────

    /// Get the resume for a user, if one has been saved.
    pub async fn get_resume(&self, owner_id: &str) -> Result<Option<StoredResume>, AppError> {
        self.get_client()?
            .fluent()
            .select()
            .by_id_in(collections::RESUMES)
            .obj()
            .one(owner_id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Replace a user's resume in a single atomic document write.
    ///
    /// Upsert semantics: after this call exactly one resume exists for the
    /// owner, holding exactly this document's content. Concurrent saves for
    /// the same owner settle on one full document (last commit wins), never
    /// zero and never two.
    pub async fn replace_resume(&self, resume: &StoredResume) -> Result<(), AppError> {
        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collections::RESUMES)
            .document_id(&resume.owner_id)
            .object(resume)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}

/// Document ID for a user: the URL-encoded email.
///
/// Encoding guards against characters Firestore reserves in document
/// names (forward slashes, leading dots).
fn user_doc_id(email: &str) -> String {
    urlencoding::encode(email).into_owned()
}
