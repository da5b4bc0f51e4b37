//! Database layer (Firestore).

pub mod firestore;

pub use firestore::FirestoreDb;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// One resume document per user, keyed by the owner's user ID.
    pub const RESUMES: &str = "resume";
}
